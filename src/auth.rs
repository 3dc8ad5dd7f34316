/// Proof that the caller is an authenticated administrator.
///
/// The workflow requires one for every decision; how the credentials were
/// checked is the caller's concern, not this crate's.
#[derive(Debug, Clone, Copy)]
pub struct AdminContext(());

impl AdminContext {
    /// Turns the caller's authentication verdict into a context. `false`
    /// yields `None`, so unauthenticated code paths cannot obtain one.
    pub fn from_verified(is_admin: bool) -> Option<Self> {
        is_admin.then_some(Self(()))
    }
}
