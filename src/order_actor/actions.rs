/// Order-specific operations beyond CRUD.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderAction {
    /// Marks the order closed. Closing a closed order rewrites it unchanged.
    Close,
}
