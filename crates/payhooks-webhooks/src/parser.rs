//! The webhook payload parser.

use std::io::Read;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{Result, WebhookError};
use crate::notification::Notification;
use crate::patch;
use crate::registry;

/// Parse one webhook payload from `reader` into a typed notification.
///
/// The reader is taken by value and dropped as soon as it has been read to
/// exhaustion, on success and failure paths alike. Each call is an
/// independent, stateless transformation: the payload is buffered, the root
/// element name probed, the registered shape decoded from the same buffer,
/// and the transaction patch applied to payment kinds.
///
/// # Errors
///
/// - [`WebhookError::Read`] if the reader fails before exhaustion.
/// - [`WebhookError::Malformed`] if the buffer is not well-formed XML at the
///   structure a decode pass needs.
/// - [`WebhookError::UnknownNotification`] if the root element name is not a
///   registered kind. Callers should treat this one as a normal branch.
pub fn parse<R: Read>(reader: R) -> Result<Notification> {
    let payload = buffer(reader)?;
    let name = probe_root_name(&payload)?;

    let decode = match registry::resolve(&name) {
        Some(decode) => decode,
        None => return Err(WebhookError::UnknownNotification { name }),
    };
    tracing::trace!(kind = name.as_str(), "resolved notification kind");

    let mut notification = decode(&payload)?;
    patch::apply(&mut notification, &payload)?;

    Ok(notification)
}

fn buffer<R: Read>(mut reader: R) -> Result<Vec<u8>> {
    let mut payload = Vec::new();
    reader.read_to_end(&mut payload)?;
    Ok(payload)
}

/// First pass: walk the document's events, keeping only the root element's
/// local name. The whole buffer is scanned, so structural damage surfaces
/// here even when the root name is not registered.
fn probe_root_name(payload: &[u8]) -> Result<String> {
    let mut xml = Reader::from_reader(payload);
    let mut root = None;

    loop {
        match xml.read_event() {
            Ok(Event::Start(start)) | Ok(Event::Empty(start)) => {
                if root.is_none() {
                    root = Some(String::from_utf8_lossy(start.local_name().as_ref()).into_owned());
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => return Err(err.into()),
        }
    }

    root.ok_or_else(|| WebhookError::Malformed("payload has no root element".to_string()))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::io::{self, Cursor};
    use std::rc::Rc;

    use super::*;
    use crate::kinds;

    #[test]
    fn minimal_document_decodes_for_every_registered_kind() {
        for kind in kinds::ALL {
            let payload = format!("<{kind}></{kind}>");
            let notification = parse(Cursor::new(payload)).unwrap_or_else(|err| {
                panic!("minimal {kind} document should parse: {err}");
            });

            assert_eq!(notification.kind(), kind);
            assert_eq!(notification.account().code, "");
        }
    }

    #[test]
    fn unknown_root_name_carries_the_wire_name() {
        let payload = b"<big_bang_notification><account/></big_bang_notification>";
        let err = parse(Cursor::new(payload.to_vec())).unwrap_err();

        match err {
            WebhookError::UnknownNotification { name } => {
                assert_eq!(name, "big_bang_notification");
            }
            other => panic!("expected UnknownNotification, got {other:?}"),
        }
    }

    #[test]
    fn new_account_document_populates_nested_account() {
        let payload = b"<new_account_notification>\
            <account><account_code>ab1</account_code></account>\
            </new_account_notification>";

        let notification = parse(Cursor::new(payload.to_vec())).unwrap();

        match &notification {
            Notification::NewAccount(n) => assert_eq!(n.account.code, "ab1"),
            other => panic!("expected NewAccount, got {other:?}"),
        }
        assert_eq!(notification.account().code, "ab1");
    }

    #[test]
    fn subscription_document_populates_both_sub_records() {
        let payload = b"<renewed_subscription_notification>\
            <account><account_code>verena</account_code></account>\
            <subscription>\
                <plan><plan_code>bronze</plan_code><name>Bronze Plan</name></plan>\
                <state>active</state>\
                <quantity>2</quantity>\
            </subscription>\
            </renewed_subscription_notification>";

        let notification = parse(Cursor::new(payload.to_vec())).unwrap();

        let subscription = notification.subscription().expect("subscription sub-record");
        assert_eq!(notification.account().code, "verena");
        assert_eq!(subscription.plan.code, "bronze");
        assert_eq!(subscription.quantity, 2);
    }

    #[test]
    fn invoice_document_populates_invoice() {
        let payload = b"<past_due_invoice_notification>\
            <account><account_code>verena</account_code></account>\
            <invoice><state>past_due</state><invoice_number>1000</invoice_number>\
            <total_in_cents>1100</total_in_cents></invoice>\
            </past_due_invoice_notification>";

        let notification = parse(Cursor::new(payload.to_vec())).unwrap();

        let invoice = notification.invoice().expect("invoice sub-record");
        assert_eq!(invoice.state, "past_due");
        assert_eq!(invoice.invoice_number, 1000);
        assert_eq!(invoice.total_in_cents, 1100);
    }

    #[test]
    fn payment_patch_lifts_id_and_invoice_number() {
        let payload = b"<successful_payment_notification>\
            <account><account_code>verena</account_code></account>\
            <transaction>\
                <id>a5143c1d3a6f4a8287d0e2cc</id>\
                <invoice_number>7</invoice_number>\
                <action>purchase</action>\
                <amount_in_cents>1000</amount_in_cents>\
            </transaction>\
            </successful_payment_notification>";

        let notification = parse(Cursor::new(payload.to_vec())).unwrap();

        let transaction = notification.transaction().expect("transaction sub-record");
        assert_eq!(transaction.uuid, "a5143c1d3a6f4a8287d0e2cc");
        assert_eq!(transaction.invoice_number, 7);
        assert_eq!(transaction.action, "purchase");
        assert_eq!(transaction.amount_in_cents, 1000);
    }

    #[test]
    fn failed_payment_without_invoice_number_defaults_to_zero() {
        let payload = b"<failed_payment_notification>\
            <account/>\
            <transaction><id>abc123</id></transaction>\
            </failed_payment_notification>";

        let notification = parse(Cursor::new(payload.to_vec())).unwrap();

        assert!(matches!(notification, Notification::FailedPayment(_)));
        let transaction = notification.transaction().expect("transaction sub-record");
        assert_eq!(transaction.uuid, "abc123");
        assert_eq!(transaction.invoice_number, 0);
    }

    #[test]
    fn mismatched_tags_fail_malformed_for_registered_root() {
        let payload = b"<new_account_notification><account></wrong>\
            </new_account_notification>";
        let err = parse(Cursor::new(payload.to_vec())).unwrap_err();
        assert!(matches!(err, WebhookError::Malformed(_)), "got {err:?}");
    }

    #[test]
    fn mismatched_tags_fail_malformed_for_unregistered_root() {
        let payload = b"<mystery_notification><account></wrong></mystery_notification>";
        let err = parse(Cursor::new(payload.to_vec())).unwrap_err();
        assert!(matches!(err, WebhookError::Malformed(_)), "got {err:?}");
    }

    #[test]
    fn empty_payload_fails_malformed() {
        let err = parse(Cursor::new(Vec::new())).unwrap_err();
        assert!(matches!(err, WebhookError::Malformed(_)));
    }

    #[test]
    fn xml_declaration_and_leading_whitespace_are_accepted() {
        let payload = b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\n\
            <new_account_notification><account/></new_account_notification>";
        let notification = parse(Cursor::new(payload.to_vec())).unwrap();
        assert!(matches!(notification, Notification::NewAccount(_)));
    }

    #[test]
    fn read_failure_surfaces_as_read_error() {
        struct FailingReader {
            bytes: &'static [u8],
            pos: usize,
        }

        impl Read for FailingReader {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                if self.pos >= self.bytes.len() {
                    return Err(io::Error::other("connection reset"));
                }
                let n = (self.bytes.len() - self.pos).min(buf.len());
                buf[..n].copy_from_slice(&self.bytes[self.pos..self.pos + n]);
                self.pos += n;
                Ok(n)
            }
        }

        let err = parse(FailingReader {
            bytes: b"<new_account_notification>",
            pos: 0,
        })
        .unwrap_err();
        assert!(matches!(err, WebhookError::Read(_)), "got {err:?}");
    }

    #[test]
    fn reader_is_released_on_every_exit_path() {
        struct DropTracker {
            inner: Cursor<Vec<u8>>,
            dropped: Rc<Cell<bool>>,
        }

        impl Read for DropTracker {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                self.inner.read(buf)
            }
        }

        impl Drop for DropTracker {
            fn drop(&mut self) {
                self.dropped.set(true);
            }
        }

        let cases: [(&[u8], bool); 3] = [
            (b"<new_account_notification/>", true),
            (b"<mystery_notification/>", false),
            (b"<new_account_notification><a></b>", false),
        ];

        for (payload, should_succeed) in cases {
            let dropped = Rc::new(Cell::new(false));
            let reader = DropTracker {
                inner: Cursor::new(payload.to_vec()),
                dropped: Rc::clone(&dropped),
            };

            let result = parse(reader);
            assert_eq!(result.is_ok(), should_succeed, "payload: {payload:?}");
            assert!(dropped.get(), "reader not released for {payload:?}");
        }
    }

    #[test]
    fn canceled_account_uses_the_double_l_token() {
        let payload = b"<cancelled_account_notification>\
            <account><account_code>gone</account_code></account>\
            </cancelled_account_notification>";

        let notification = parse(Cursor::new(payload.to_vec())).unwrap();
        assert!(matches!(notification, Notification::CanceledAccount(_)));

        // The single-l spelling is the subscription token, not the account one.
        let payload = b"<canceled_account_notification/>";
        let err = parse(Cursor::new(payload.to_vec())).unwrap_err();
        assert!(matches!(err, WebhookError::UnknownNotification { .. }));
    }
}
