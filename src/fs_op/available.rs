use crate::fs_op::path::Resolver;

/// Return the games from `names` that `resolver` can find, keeping the
/// input order. Unresolvable names are simply dropped.
pub fn available<R, S>(names: &[S], resolver: &R) -> Vec<String>
where
    R: Resolver + ?Sized,
    S: AsRef<str>,
{
    let found: Vec<String> = names
        .iter()
        .map(AsRef::as_ref)
        .filter(|n| resolver.is_installed(n))
        .map(str::to_string)
        .collect();
    tracing::debug!(candidates = names.len(), installed = found.len(), "scanned for installed games");
    found
}
