use crate::error::Result;
use crate::model::{Cross, Order, SecurityDefinitionRequest};

/// Builds outbound protocol messages from saved entities.
///
/// Implementations pick the message layout from the protocol version of the
/// entity's session. They never touch the registry and never return a
/// partially built message.
pub trait MessageFactory: Send + Sync {
    type Message;

    /// Builds a new-order message for `order`.
    ///
    /// # Returns
    ///
    /// * `Ok(Message)` populated for the session's protocol version.
    /// * `Err(OmsError::UnsupportedVersion)` if no builder exists for it.
    fn new_order_single(&self, order: &Order) -> Result<Self::Message>;

    /// Builds a two-sided new-cross message for `cross`.
    fn new_order_cross(&self, cross: &Cross) -> Result<Self::Message>;

    /// Builds a cancel for `order`, sent under the fresh `cl_ord_id`.
    ///
    /// # Arguments
    ///
    /// * `order` - The order being cancelled; its own client order id becomes
    ///   the "original" id of the request.
    /// * `cl_ord_id` - The id issued for the cancel itself.
    fn order_cancel_request(&self, order: &Order, cl_ord_id: &str) -> Result<Self::Message>;

    /// Requests a security definition from the counterparty.
    fn security_definition_request(
        &self,
        request: &SecurityDefinitionRequest,
    ) -> Result<Self::Message>;
}
