//! The in-memory registry of orders, crosses and executions.
//!
//! `OrderManager` is the single source of truth for live entities and the
//! only place numeric ids and client order ids are issued. All state sits
//! behind one reader/writer lock: lookups and snapshots share it, saves and
//! re-assignments hold it exclusively, so no reader ever sees a save that
//! has bumped a counter without indexing the entity (or the reverse).

use log::debug;
use oms::{
    ClOrdIdGenerator, Cross, Execution, ExecutionId, ExecutionReport, NewCross, NewOrder,
    OmsError, Order, OrderId, Result,
};
use parking_lot::RwLock;
use std::collections::HashMap;

/// Everything the lock protects.
#[derive(Default)]
struct Books {
    /// Last id handed to an order or cross. Both draw from this counter.
    last_order_id: OrderId,
    last_execution_id: ExecutionId,

    orders: HashMap<OrderId, Order>,
    crosses: HashMap<OrderId, Cross>,
    executions: HashMap<ExecutionId, Execution>,

    orders_by_cl_ord_id: HashMap<String, OrderId>,
    crosses_by_cl_ord_id: HashMap<String, OrderId>,
    /// Cross leg ids, reserved against reuse. Maps to the owning cross.
    leg_cl_ord_ids: HashMap<String, OrderId>,
}

impl Books {
    fn cl_ord_id_in_use(&self, cl_ord_id: &str) -> bool {
        self.orders_by_cl_ord_id.contains_key(cl_ord_id)
            || self.crosses_by_cl_ord_id.contains_key(cl_ord_id)
            || self.leg_cl_ord_ids.contains_key(cl_ord_id)
    }

    /// Draws an id from `generator`, refusing one that is already indexed.
    fn fresh_cl_ord_id(&self, generator: &dyn ClOrdIdGenerator) -> Result<String> {
        let cl_ord_id = generator.next();
        if self.cl_ord_id_in_use(&cl_ord_id) {
            return Err(OmsError::DuplicateClOrdId(cl_ord_id));
        }
        Ok(cl_ord_id)
    }
}

/// Concurrency-safe store of orders, crosses and executions.
///
/// Entities handed out by the getters are copies; mutating them has no
/// effect on the registry.
pub struct OrderManager {
    books: RwLock<Books>,
    cl_ord_id: Box<dyn ClOrdIdGenerator>,
}

impl OrderManager {
    /// Creates an empty registry.
    ///
    /// # Arguments
    ///
    /// * `cl_ord_id` - Strategy used for every client order id the registry
    ///   issues. It must never repeat itself, even under concurrent calls.
    pub fn new(cl_ord_id: Box<dyn ClOrdIdGenerator>) -> Self {
        Self {
            books: RwLock::new(Books::default()),
            cl_ord_id,
        }
    }

    /// Stores a new order under a fresh numeric id and client order id.
    ///
    /// # Returns
    ///
    /// * `Ok(Order)` - A copy of the stored order with its identifiers bound.
    /// * `Err(OmsError::DuplicateClOrdId)` if the generator repeated an id
    ///   already in use. Nothing is stored and no numeric id is consumed.
    pub fn save_order(&self, order: NewOrder) -> Result<Order> {
        let mut books = self.books.write();

        let cl_ord_id = books.fresh_cl_ord_id(self.cl_ord_id.as_ref())?;
        let id = books.last_order_id + 1;
        let order = Order::new(id, cl_ord_id, order);

        books.last_order_id = id;
        books
            .orders_by_cl_ord_id
            .insert(order.cl_ord_id().to_string(), id);
        books.orders.insert(id, order.clone());

        debug!("Saved order {} as ClOrdID {}", id, order.cl_ord_id());
        Ok(order)
    }

    /// Stores a new cross, drawing its numeric id from the order counter.
    ///
    /// Legs submitted without a client order id get one from the generator.
    /// The cross id and both leg ids must end up pairwise distinct and unused
    /// by any order, cross or earlier leg. Leg ids are reserved on success.
    pub fn save_cross(&self, mut cross: NewCross) -> Result<Cross> {
        let mut books = self.books.write();

        let cl_ord_id = books.fresh_cl_ord_id(self.cl_ord_id.as_ref())?;
        if cross.buy.cl_ord_id.is_empty() {
            cross.buy.cl_ord_id = self.cl_ord_id.next();
        }
        if cross.sell.cl_ord_id.is_empty() {
            cross.sell.cl_ord_id = self.cl_ord_id.next();
        }
        if cross.buy.cl_ord_id == cross.sell.cl_ord_id || cross.buy.cl_ord_id == cl_ord_id {
            return Err(OmsError::DuplicateClOrdId(cross.buy.cl_ord_id));
        }
        if cross.sell.cl_ord_id == cl_ord_id {
            return Err(OmsError::DuplicateClOrdId(cross.sell.cl_ord_id));
        }
        for leg in [&cross.buy, &cross.sell] {
            if books.cl_ord_id_in_use(&leg.cl_ord_id) {
                return Err(OmsError::DuplicateClOrdId(leg.cl_ord_id.clone()));
            }
        }

        let id = books.last_order_id + 1;
        let cross = Cross::new(id, cl_ord_id, cross);

        books.last_order_id = id;
        books
            .crosses_by_cl_ord_id
            .insert(cross.cl_ord_id().to_string(), id);
        for leg in [cross.buy(), cross.sell()] {
            books.leg_cl_ord_ids.insert(leg.cl_ord_id.clone(), id);
        }
        books.crosses.insert(id, cross.clone());

        debug!("Saved cross {} as ClOrdID {}", id, cross.cl_ord_id());
        Ok(cross)
    }

    /// Records an execution under the next execution id.
    pub fn save_execution(&self, report: ExecutionReport) -> Result<Execution> {
        let mut books = self.books.write();

        let id = books.last_execution_id + 1;
        let execution = Execution::new(id, report);

        books.last_execution_id = id;
        books.executions.insert(id, execution.clone());

        debug!(
            "Saved execution {} for ClOrdID {}",
            id,
            execution.report().cl_ord_id
        );
        Ok(execution)
    }

    /// Issues another client order id for a saved order, e.g. for a cancel.
    ///
    /// The order keeps its numeric id and its original client order id; the
    /// old id stays resolvable next to the new one.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The newly indexed client order id.
    /// * `Err(OmsError::NotFound)` if the order was never saved here.
    pub fn assign_next_order_cl_ord_id(&self, order: &Order) -> Result<String> {
        let mut books = self.books.write();

        if !books.orders.contains_key(&order.id()) {
            return Err(OmsError::not_found("order", format!("id {}", order.id())));
        }
        let cl_ord_id = books.fresh_cl_ord_id(self.cl_ord_id.as_ref())?;
        books
            .orders_by_cl_ord_id
            .insert(cl_ord_id.clone(), order.id());

        debug!("Order {} re-indexed under ClOrdID {}", order.id(), cl_ord_id);
        Ok(cl_ord_id)
    }

    /// Issues another client order id for a saved cross.
    pub fn assign_next_cross_cl_ord_id(&self, cross: &Cross) -> Result<String> {
        let mut books = self.books.write();

        if !books.crosses.contains_key(&cross.id()) {
            return Err(OmsError::not_found("cross", format!("id {}", cross.id())));
        }
        let cl_ord_id = books.fresh_cl_ord_id(self.cl_ord_id.as_ref())?;
        books
            .crosses_by_cl_ord_id
            .insert(cl_ord_id.clone(), cross.id());

        debug!("Cross {} re-indexed under ClOrdID {}", cross.id(), cl_ord_id);
        Ok(cl_ord_id)
    }

    pub fn get_order(&self, id: OrderId) -> Result<Order> {
        self.books
            .read()
            .orders
            .get(&id)
            .cloned()
            .ok_or_else(|| OmsError::not_found("order", format!("id {}", id)))
    }

    pub fn get_cross(&self, id: OrderId) -> Result<Cross> {
        self.books
            .read()
            .crosses
            .get(&id)
            .cloned()
            .ok_or_else(|| OmsError::not_found("cross", format!("id {}", id)))
    }

    pub fn get_execution(&self, id: ExecutionId) -> Result<Execution> {
        self.books
            .read()
            .executions
            .get(&id)
            .cloned()
            .ok_or_else(|| OmsError::not_found("execution", format!("id {}", id)))
    }

    /// Looks an order up by any client order id it was ever indexed under.
    pub fn get_by_cl_ord_id(&self, cl_ord_id: &str) -> Result<Order> {
        let books = self.books.read();
        books
            .orders_by_cl_ord_id
            .get(cl_ord_id)
            .and_then(|id| books.orders.get(id))
            .cloned()
            .ok_or_else(|| OmsError::not_found("order", format!("clordid {}", cl_ord_id)))
    }

    pub fn get_cross_by_cl_ord_id(&self, cl_ord_id: &str) -> Result<Cross> {
        let books = self.books.read();
        books
            .crosses_by_cl_ord_id
            .get(cl_ord_id)
            .and_then(|id| books.crosses.get(id))
            .cloned()
            .ok_or_else(|| OmsError::not_found("cross", format!("clordid {}", cl_ord_id)))
    }

    /// Snapshot of every order, in no particular order.
    pub fn get_all_orders(&self) -> Vec<Order> {
        self.books.read().orders.values().cloned().collect()
    }

    /// Snapshot of every cross, in no particular order.
    pub fn get_all_crosses(&self) -> Vec<Cross> {
        self.books.read().crosses.values().cloned().collect()
    }

    /// Snapshot of every execution, in no particular order.
    pub fn get_all_executions(&self) -> Vec<Execution> {
        self.books.read().executions.values().cloned().collect()
    }

    pub fn order_count(&self) -> usize {
        self.books.read().orders.len()
    }

    pub fn cross_count(&self) -> usize {
        self.books.read().crosses.len()
    }

    pub fn execution_count(&self) -> usize {
        self.books.read().executions.len()
    }
}

#[cfg(test)]
mod tests;
