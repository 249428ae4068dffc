//! Line-level diff via longest common subsequence.

/// One step of a line diff, in output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOp<'a> {
    Unchanged(&'a str),
    Deleted(&'a str),
    Inserted(&'a str),
}

/// Myers-style line diff of `a` against `b`.
///
/// Classic LCS dynamic program with backtracking; within a mixed region the
/// deleted lines are emitted before the inserted ones, which lets the caller
/// treat each delete-run/insert-run pair as a replace block.
#[must_use]
pub fn diff_lines<'a>(a: &[&'a str], b: &[&'a str]) -> Vec<LineOp<'a>> {
    let n = a.len();
    let m = b.len();

    // dp[i][j] = LCS length of a[..i], b[..j]
    let mut dp = vec![vec![0usize; m + 1]; n + 1];
    for i in 1..=n {
        for j in 1..=m {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }

    let mut ops = Vec::with_capacity(n + m);
    let mut i = n;
    let mut j = m;
    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            ops.push(LineOp::Unchanged(a[i - 1]));
            i -= 1;
            j -= 1;
        } else if dp[i - 1][j] >= dp[i][j - 1] {
            ops.push(LineOp::Deleted(a[i - 1]));
            i -= 1;
        } else {
            ops.push(LineOp::Inserted(b[j - 1]));
            j -= 1;
        }
    }
    while i > 0 {
        ops.push(LineOp::Deleted(a[i - 1]));
        i -= 1;
    }
    while j > 0 {
        ops.push(LineOp::Inserted(b[j - 1]));
        j -= 1;
    }

    ops.reverse();
    normalize_replace_blocks(ops)
}

/// Reorder each mixed delete/insert region so all deletions in the region
/// precede all insertions. Backtracking can interleave them; downstream
/// pairing wants clean runs.
fn normalize_replace_blocks(ops: Vec<LineOp<'_>>) -> Vec<LineOp<'_>> {
    let mut out = Vec::with_capacity(ops.len());
    let mut deletes = Vec::new();
    let mut inserts = Vec::new();

    for op in ops {
        match op {
            LineOp::Deleted(_) => deletes.push(op),
            LineOp::Inserted(_) => inserts.push(op),
            LineOp::Unchanged(_) => {
                out.append(&mut deletes);
                out.append(&mut inserts);
                out.push(op);
            }
        }
    }
    out.append(&mut deletes);
    out.append(&mut inserts);
    out
}
