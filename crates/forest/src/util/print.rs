use crate::types::Node;

/// Pre-order dump of the subtree under `root`.
///
/// One node per line, right-aligned in a field that grows by two columns per
/// level (the root gets width 2). This is a shape visualization, not the
/// sorted order of the container.
pub fn print_preorder<N, F>(arena: &[N], root: Option<u32>, render: F) -> String
where
    N: Node,
    F: Fn(&N) -> String,
{
    let mut out = String::new();
    let mut stack: Vec<(u32, usize)> = root.map(|r| (r, 2)).into_iter().collect();
    while let Some((idx, width)) = stack.pop() {
        let node = &arena[idx as usize];
        out.push_str(&format!("{:>width$}\n", render(node), width = width));
        if let Some(r) = node.r() {
            stack.push((r, width + 2));
        }
        if let Some(l) = node.l() {
            stack.push((l, width + 2));
        }
    }
    out
}
