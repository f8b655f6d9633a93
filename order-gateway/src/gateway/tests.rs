use super::*;
use oms::{CrossType, OmsError, OrdType, Side};
use oms_core::fix::tag;
use std::thread;

fn create_test_gateway() -> Gateway {
    Gateway::from_settings(&Settings::default())
}

fn ibm_limit(session: &str) -> OrderTicket {
    OrderTicket {
        symbol: "IBM".into(),
        quantity: "100".into(),
        session_id: session.into(),
        side: Some(Side::Buy),
        ord_type: Some(OrdType::Limit),
        price: "150.25".into(),
        ..Default::default()
    }
}

fn sent(outcome: Outcome) -> Message {
    match outcome {
        Outcome::Sent(msg) => msg,
        other => panic!("expected a message, got {:?}", other),
    }
}

#[test]
fn test_new_order_is_saved_and_built() {
    let gateway = create_test_gateway();
    let msg = sent(
        gateway
            .process(Request::NewOrder(ibm_limit("fix42")))
            .unwrap(),
    );

    assert_eq!(msg.body.get(tag::CL_ORD_ID), Some("1"));
    assert_eq!(msg.body.get(tag::PRICE), Some("150.25"));
    assert_eq!(gateway.manager().order_count(), 1);
    assert_eq!(
        gateway.manager().get_by_cl_ord_id("1").unwrap().symbol(),
        "IBM"
    );
}

#[test]
fn test_unknown_session_is_a_validation_error() {
    let gateway = create_test_gateway();
    let result = gateway.process(Request::NewOrder(ibm_limit("nowhere")));

    assert_eq!(
        result,
        Err(OmsError::Validation(ValidationError::UnknownSession(
            "nowhere".into()
        )))
    );
    assert_eq!(gateway.manager().order_count(), 0);
}

#[test]
fn test_invalid_price_is_not_saved() {
    let gateway = create_test_gateway();
    let ticket = OrderTicket {
        price: "".into(),
        ..ibm_limit("fix44")
    };

    assert_eq!(
        gateway.process(Request::NewOrder(ticket)),
        Err(OmsError::Validation(ValidationError::InvalidPrice(
            String::new()
        )))
    );
    assert_eq!(gateway.manager().order_count(), 0);
}

#[test]
fn test_cancel_uses_a_fresh_cl_ord_id() {
    let gateway = create_test_gateway();
    gateway
        .process(Request::NewOrder(ibm_limit("fix42")))
        .unwrap();

    let msg = sent(gateway.process(Request::Cancel { order_id: 1 }).unwrap());
    assert_eq!(msg.body.get(tag::ORIG_CL_ORD_ID), Some("1"));
    assert_eq!(msg.body.get(tag::CL_ORD_ID), Some("2"));
    assert_eq!(gateway.manager().get_by_cl_ord_id("2").unwrap().id(), 1);
}

#[test]
fn test_cancel_of_unknown_order_fails() {
    let gateway = create_test_gateway();
    assert!(matches!(
        gateway.process(Request::Cancel { order_id: 42 }),
        Err(OmsError::NotFound { kind: "order", .. })
    ));
}

#[test]
fn test_cancel_outside_fix42_leaves_no_new_cl_ord_id() {
    let gateway = create_test_gateway();
    gateway
        .process(Request::NewOrder(ibm_limit("fix44")))
        .unwrap();

    assert!(matches!(
        gateway.process(Request::Cancel { order_id: 1 }),
        Err(OmsError::UnsupportedVersion {
            operation: "OrderCancelRequest",
            ..
        })
    ));
    assert!(gateway.manager().get_by_cl_ord_id("2").is_err());

    // The next id issued is still "2".
    let msg = sent(
        gateway
            .process(Request::NewOrder(ibm_limit("fix42")))
            .unwrap(),
    );
    assert_eq!(msg.body.get(tag::CL_ORD_ID), Some("2"));
}

#[test]
fn test_cross_request() {
    let gateway = create_test_gateway();
    let ticket = CrossTicket {
        cross_type: Some(CrossType::AonBothSides),
        symbol: "IBM".into(),
        quantity: "500".into(),
        session_id: "fixt11".into(),
        ord_type: Some(OrdType::Market),
        buy_account: "BuyAccount".into(),
        sell_account: "SellAccount".into(),
        ..Default::default()
    };

    let msg = sent(gateway.process(Request::NewCross(ticket)).unwrap());
    assert_eq!(msg.header.get(tag::MSG_TYPE), Some("s"));
    assert_eq!(msg.body.group(tag::NO_SIDES).map(|g| g.len()), Some(2));
    assert_eq!(gateway.manager().cross_count(), 1);
}

#[test]
fn test_batch_continues_past_failures() {
    let gateway = create_test_gateway();
    let requests = crate::io::requests::read(
        r#"[
            {"type": "new_order", "symbol": "IBM", "quantity": "100", "session_id": "fix42",
             "side": "BUY", "ord_type": "LIMIT", "price": "150.25"},
            {"type": "new_order", "symbol": "IBM", "quantity": "abc", "session_id": "fix42",
             "side": "BUY", "ord_type": "MARKET"},
            {"type": "cancel", "order_id": 1},
            {"type": "execution", "clord_id": "1", "symbol": "IBM", "side": "BUY",
             "status": "FILLED", "last_qty": "100", "last_px": "150.25"}
        ]"#
        .as_bytes(),
    )
    .unwrap();

    let mut out = Vec::new();
    let summary = gateway.run(requests, &mut out).unwrap();

    assert_eq!(
        summary,
        Summary {
            sent: 2,
            recorded: 1,
            failed: 1
        }
    );
    let lines: Vec<_> = std::str::from_utf8(&out).unwrap().lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("8=FIX.4.2|35=D|"));
    assert!(lines[1].starts_with("8=FIX.4.2|35=F|"));
    assert_eq!(gateway.manager().execution_count(), 1);
}

#[test]
fn test_shared_across_threads() {
    let gateway = create_test_gateway();

    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..50 {
                    gateway
                        .process(Request::NewOrder(ibm_limit("fixt11")))
                        .unwrap();
                }
            });
        }
    });

    assert_eq!(gateway.manager().order_count(), 200);
}
