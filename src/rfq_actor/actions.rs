/// Customer responses to a quote.
///
/// Both set the status unconditionally; staff can still move the RFQ on
/// through a patch afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RfqAction {
    /// Customer accepts the quote; the RFQ becomes `paid`.
    Accept,
    /// Customer turns the quote down; the RFQ becomes `rejected`.
    Reject,
}
