/// Source of client order ids.
///
/// The registry holds one generator and calls it whenever it binds a new id
/// to an order, a cross, or a cross leg.
pub trait ClOrdIdGenerator: Send + Sync {
    /// Returns the next identifier.
    ///
    /// # Returns
    ///
    /// * A value this instance has never returned before, even when called
    ///   from several threads at once.
    fn next(&self) -> String;
}

impl ClOrdIdGenerator for Box<dyn ClOrdIdGenerator> {
    fn next(&self) -> String {
        (**self).next()
    }
}
