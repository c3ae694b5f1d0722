use linediff::{
    DiffOptions, SplitCell, SplitRowKind, build_split_view, calculate_diff_stats, compute_diff,
    format_diff_as_text, group_hunks,
};

fn main() {
    let old = r#"fn main() {
    let x = 1;
    println!("x = {}", x);
}
"#;

    let new = r#"fn main() {
    let   x = 2;
    println!( "x = {}", x);
    println!("done");
}
"#;

    for ignore_whitespace in [false, true] {
        let options = DiffOptions {
            ignore_whitespace,
            ignore_case: false,
        };
        let entries = compute_diff(old, new, options);
        let stats = calculate_diff_stats(&entries);

        println!("== ignore_whitespace={ignore_whitespace} ==");
        println!(
            "unchanged: {}, added: {}, removed: {}",
            stats.unchanged, stats.added, stats.removed
        );

        for row in build_split_view(&entries).rows() {
            let marker = match row.kind() {
                SplitRowKind::Unchanged => ' ',
                SplitRowKind::Added => '+',
                SplitRowKind::Removed => '-',
                SplitRowKind::Modified => '~',
            };
            println!(
                "{marker} {:>4} | {:>4} | {:<28} || {}",
                line_number(row.left),
                line_number(row.right),
                content(row.left),
                content(row.right)
            );
        }

        for (index, hunk) in group_hunks(&entries, 1).iter().enumerate() {
            println!(
                "-- hunk {} (old {}+{}, new {}+{})",
                index + 1,
                hunk.old_start,
                hunk.old_len,
                hunk.new_start,
                hunk.new_len
            );
            println!("{}", format_diff_as_text(&hunk.entries));
        }
        println!();
    }
}

fn line_number(cell: Option<&SplitCell>) -> String {
    cell.and_then(|cell| cell.line_number)
        .map(|n| n.to_string())
        .unwrap_or_default()
}

fn content(cell: Option<&SplitCell>) -> &str {
    cell.map(|cell| cell.content.as_str()).unwrap_or_default()
}
