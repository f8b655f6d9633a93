use super::*;
use crate::clord_id::SequenceClOrdIdGenerator;
use oms::{CrossLeg, CrossType, ExecutionStatus, OrdType, SessionId, Side};
use rust_decimal_macros::dec;
use std::sync::Mutex;

fn create_test_manager() -> OrderManager {
    OrderManager::new(Box::new(SequenceClOrdIdGenerator::new("")))
}

fn session() -> SessionId {
    SessionId::new("FIX.4.2", "TW", "ISLD")
}

fn limit_order(symbol: &str) -> NewOrder {
    NewOrder::new(session(), symbol, Side::Buy, OrdType::Limit, dec!(100)).with_price(dec!(150.25))
}

fn cross() -> NewCross {
    NewCross::new(
        SessionId::new("FIXT.1.1", "TW", "ISLD"),
        CrossType::AonBothSides,
        "IBM",
        OrdType::Market,
        dec!(500),
        CrossLeg::buy().with_account("BuyAccount"),
        CrossLeg::sell().with_account("SellAccount"),
    )
}

/// Replays a fixed list of ids, then repeats the last one forever.
struct ScriptedGenerator {
    ids: Mutex<Vec<&'static str>>,
}

impl ScriptedGenerator {
    fn new(mut ids: Vec<&'static str>) -> Self {
        ids.reverse();
        Self {
            ids: Mutex::new(ids),
        }
    }
}

impl ClOrdIdGenerator for ScriptedGenerator {
    fn next(&self) -> String {
        let mut ids = self.ids.lock().unwrap();
        if ids.len() > 1 {
            ids.pop().unwrap().to_string()
        } else {
            ids[0].to_string()
        }
    }
}

#[test]
fn test_save_order_binds_ids() {
    let om = create_test_manager();

    let first = om.save_order(limit_order("IBM")).unwrap();
    let second = om.save_order(limit_order("MSFT")).unwrap();

    assert_eq!(first.id(), 1);
    assert_eq!(first.cl_ord_id(), "1");
    assert_eq!(second.id(), 2);
    assert_eq!(second.cl_ord_id(), "2");
    assert_eq!(first.price(), Some(dec!(150.25)));
}

#[test]
fn test_get_order_after_save() {
    let om = create_test_manager();
    let saved = om.save_order(limit_order("IBM")).unwrap();

    let by_id = om.get_order(saved.id()).unwrap();
    let by_cl_ord_id = om.get_by_cl_ord_id(saved.cl_ord_id()).unwrap();

    assert_eq!(by_id, saved);
    assert_eq!(by_cl_ord_id, saved);
}

#[test]
fn test_lookup_misses_are_not_found() {
    let om = create_test_manager();

    assert!(matches!(om.get_order(9), Err(OmsError::NotFound { kind: "order", .. })));
    assert!(matches!(om.get_cross(9), Err(OmsError::NotFound { kind: "cross", .. })));
    assert!(matches!(
        om.get_execution(9),
        Err(OmsError::NotFound { kind: "execution", .. })
    ));
    assert!(matches!(
        om.get_by_cl_ord_id("nope"),
        Err(OmsError::NotFound { .. })
    ));
}

#[test]
fn test_orders_and_crosses_share_one_counter() {
    let om = create_test_manager();

    let order = om.save_order(limit_order("IBM")).unwrap();
    let cross = om.save_cross(cross()).unwrap();
    let next = om.save_order(limit_order("IBM")).unwrap();

    assert_eq!(order.id(), 1);
    assert_eq!(cross.id(), 2);
    assert_eq!(next.id(), 3);

    // Ids are disjoint across the two maps.
    assert!(om.get_order(cross.id()).is_err());
    assert_eq!(om.get_cross(cross.id()).unwrap(), cross);
}

#[test]
fn test_executions_have_their_own_counter() {
    let om = create_test_manager();
    om.save_order(limit_order("IBM")).unwrap();
    om.save_order(limit_order("IBM")).unwrap();

    let report = ExecutionReport::new("1", "IBM", Side::Buy, ExecutionStatus::Filled);
    let first = om.save_execution(report.clone()).unwrap();
    let second = om.save_execution(report).unwrap();

    assert_eq!(first.id(), 1);
    assert_eq!(second.id(), 2);
    assert_eq!(om.get_execution(2).unwrap(), second);
    assert_eq!(om.execution_count(), 2);
}

#[test]
fn test_save_cross_fills_leg_ids() {
    let om = create_test_manager();
    let saved = om.save_cross(cross()).unwrap();

    assert_eq!(saved.cl_ord_id(), "1");
    assert_eq!(saved.buy().cl_ord_id, "2");
    assert_eq!(saved.sell().cl_ord_id, "3");
    assert_eq!(om.get_cross_by_cl_ord_id("1").unwrap(), saved);
}

#[test]
fn test_save_cross_keeps_submitted_leg_ids() {
    let om = create_test_manager();
    let mut new_cross = cross();
    new_cross.buy.cl_ord_id = "B-1".into();
    new_cross.sell.cl_ord_id = "S-1".into();

    let saved = om.save_cross(new_cross).unwrap();
    assert_eq!(saved.buy().cl_ord_id, "B-1");
    assert_eq!(saved.sell().cl_ord_id, "S-1");
}

#[test]
fn test_save_cross_rejects_leg_colliding_with_cross_id() {
    let om = create_test_manager();
    let mut new_cross = cross();
    // The first id the generator issues is "1".
    new_cross.sell.cl_ord_id = "1".into();

    assert_eq!(
        om.save_cross(new_cross),
        Err(OmsError::DuplicateClOrdId("1".into()))
    );
    assert_eq!(om.cross_count(), 0);
}

#[test]
fn test_save_cross_rejects_leg_reusing_an_order_cl_ord_id() {
    let om = create_test_manager();
    let order = om.save_order(limit_order("IBM")).unwrap();
    let mut new_cross = cross();
    new_cross.buy.cl_ord_id = order.cl_ord_id().to_string();

    assert_eq!(
        om.save_cross(new_cross),
        Err(OmsError::DuplicateClOrdId("1".into()))
    );
    assert_eq!(om.cross_count(), 0);
}

#[test]
fn test_leg_cl_ord_ids_are_reserved() {
    let om = create_test_manager();
    let mut new_cross = cross();
    // Numeric like the generator's output, ahead of it.
    new_cross.buy.cl_ord_id = "3".into();
    let saved = om.save_cross(new_cross).unwrap();
    assert_eq!(saved.cl_ord_id(), "1");
    assert_eq!(saved.sell().cl_ord_id, "2");

    // The generator reaches "3" next: the order is refused.
    assert_eq!(
        om.save_order(limit_order("IBM")),
        Err(OmsError::DuplicateClOrdId("3".into()))
    );
    assert_eq!(om.save_order(limit_order("IBM")).unwrap().cl_ord_id(), "4");

    // A later cross may not reuse either leg id.
    let mut again = cross();
    again.sell.cl_ord_id = "2".into();
    assert_eq!(
        om.save_cross(again),
        Err(OmsError::DuplicateClOrdId("2".into()))
    );
    assert_eq!(om.cross_count(), 1);
}

#[test]
fn test_duplicate_generator_output_is_rejected_without_side_effects() {
    let om = OrderManager::new(Box::new(ScriptedGenerator::new(vec!["A", "A"])));

    let first = om.save_order(limit_order("IBM")).unwrap();
    assert_eq!(first.cl_ord_id(), "A");

    assert_eq!(
        om.save_order(limit_order("IBM")),
        Err(OmsError::DuplicateClOrdId("A".into()))
    );
    assert_eq!(om.order_count(), 1);

    // The failed save did not consume a numeric id.
    let om = OrderManager::new(Box::new(ScriptedGenerator::new(vec!["A", "A", "B"])));
    om.save_order(limit_order("IBM")).unwrap();
    assert!(om.save_order(limit_order("IBM")).is_err());
    assert_eq!(om.save_order(limit_order("IBM")).unwrap().id(), 2);
}

#[test]
fn test_assign_next_cl_ord_id_keeps_stale_mapping() {
    let om = create_test_manager();
    let order = om.save_order(limit_order("IBM")).unwrap();

    let replacement = om.assign_next_order_cl_ord_id(&order).unwrap();
    assert_eq!(replacement, "2");

    let via_new = om.get_by_cl_ord_id(&replacement).unwrap();
    let via_old = om.get_by_cl_ord_id(order.cl_ord_id()).unwrap();
    assert_eq!(via_new.id(), order.id());
    assert_eq!(via_old.id(), order.id());
    // The entity itself is untouched.
    assert_eq!(via_new.cl_ord_id(), "1");
    assert_eq!(om.order_count(), 1);
}

#[test]
fn test_assign_next_cross_cl_ord_id() {
    let om = create_test_manager();
    let saved = om.save_cross(cross()).unwrap();

    let replacement = om.assign_next_cross_cl_ord_id(&saved).unwrap();
    assert_eq!(om.get_cross_by_cl_ord_id(&replacement).unwrap().id(), saved.id());
    assert_eq!(om.get_cross_by_cl_ord_id(saved.cl_ord_id()).unwrap().id(), saved.id());
}

#[test]
fn test_assign_next_for_unsaved_order_is_not_found() {
    let om = create_test_manager();
    let foreign = Order::new(77, "X", limit_order("IBM"));

    assert!(matches!(
        om.assign_next_order_cl_ord_id(&foreign),
        Err(OmsError::NotFound { .. })
    ));
}

#[test]
fn test_snapshots_are_defensive_copies() {
    let om = create_test_manager();
    om.save_order(limit_order("IBM")).unwrap();
    om.save_order(limit_order("MSFT")).unwrap();

    let mut orders = om.get_all_orders();
    assert_eq!(orders.len(), 2);
    orders.clear();

    assert_eq!(om.get_all_orders().len(), 2);
    assert!(om.get_all_crosses().is_empty());
    assert!(om.get_all_executions().is_empty());
}
