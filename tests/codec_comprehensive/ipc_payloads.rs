//! Daemon payload tests
//!
//! Replies and requests packed on one side and unpacked on the other, the way
//! the client and the daemon see them.

use crate::*;
use iotcon::ipc::{from_bytes, to_bytes, NotifyMessage, RESULT_OK};
use std::sync::Arc;

fn resource() -> RemoteResource {
    RemoteResource::new("coap://192.168.0.7:5683", "/a/light", true, vec!["core.light".into()], 1)
        .unwrap()
}

#[test]
fn test_get_reply_carries_light_state() {
    let mut options = HeaderOptions::new();
    options.insert(2048, "first").unwrap();
    options.insert(2048, "second").unwrap();

    let reply = CruResponse {
        options: Some(options.clone()),
        representation: light(),
        result: RESULT_OK,
    };
    let decoded: CruResponse = CodecConfig::default()
        .decode_reply(&reply.encode().unwrap())
        .unwrap();

    assert_eq!(decoded.representation, light());
    assert_eq!(decoded.options, Some(options));
}

#[test]
fn test_reply_with_children_keeps_them() {
    let reply = ObserveNotification {
        options: None,
        representation: parent_with_children(2),
        result: RESULT_OK,
        sequence: 3,
    };
    let decoded = ObserveNotification::decode(&reply.encode().unwrap()).unwrap();
    assert_eq!(decoded.representation.child_count(), 2);
    assert_eq!(decoded.sequence, 3);
}

#[test]
fn test_failed_result_drops_options() {
    let mut options = HeaderOptions::new();
    options.insert(2100, "x").unwrap();
    let reply = DeleteResponse {
        options: Some(options),
        result: 12,
    };
    let decoded = DeleteResponse::decode(&reply.encode().unwrap()).unwrap();
    assert_eq!(decoded.options, None);
    assert_eq!(decoded.result(), 12);
}

#[test]
fn test_corrupt_embedded_document_fails_pending_call() {
    let bytes = to_bytes(&(Vec::<(u16, String)>::new(), r#"{"rep":{"a":[1,"b"]}}"#.to_string(), 0i32))
        .unwrap();
    let shared = Arc::new(resource());
    let (tx, rx) = std::sync::mpsc::channel();

    let call = PendingCall::<CruResponse>::new(&shared, CodecConfig::default(), move |_, out| {
        tx.send(out.map(|r| r.result)).unwrap();
    });
    call.complete(&bytes);

    assert!(rx.recv().unwrap().unwrap_err().is_type_mismatch());
    assert_eq!(Arc::strong_count(&shared), 1);
}

#[test]
fn test_put_request_reaches_daemon_intact() {
    let mut query = Query::new();
    query.insert("if", "oc.mi.def").unwrap();
    let request = Request::Put {
        resource: resource(),
        representation: light(),
        query: query.clone(),
    };

    match Request::decode(&request.encode().unwrap()).unwrap() {
        Request::Put {
            resource: got,
            representation,
            query: got_query,
        } => {
            assert_eq!(got.uri(), "/a/light");
            assert_eq!(representation, light());
            assert_eq!(got_query, query);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_device_info_absent_fields() {
    let info = DeviceInfo {
        name: Some("fridge".into()),
        firmware_version: Some("1.0.2".into()),
        ..Default::default()
    };
    let decoded: DeviceInfo = from_bytes(&to_bytes(&info).unwrap()).unwrap();
    assert_eq!(decoded, info);
    assert!(decoded.uuid.is_none());
}

#[test]
fn test_notify_message_optional() {
    assert_eq!(NotifyMessage::decode(&NotifyMessage::encode(None).unwrap()).unwrap(), None);

    let msg = NotifyMessage {
        error_code: 0,
        iface: 2,
        representation: light(),
    };
    let decoded = NotifyMessage::decode(&NotifyMessage::encode(Some(&msg)).unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(decoded.representation, light());
}
