//! Property-based tests for the identity handshake.
//!
//! # Oracle
//!
//! A shadow model tracks the last announced name. Every message produced by
//! the extractor must carry exactly the label the model predicts, and the
//! messages must come out in input order with their text untouched.

use fanin_proto::{ConnectionIdentity, IDENTITY_MARKER, LABEL_TERMINATOR, LineFramer};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Input {
    Announce(String),
    Say(String),
}

fn input_strategy() -> impl Strategy<Value = Input> {
    prop_oneof![
        1 => "[A-Za-z]{0,8}".prop_map(Input::Announce),
        3 => "[a-z ]{0,16}".prop_map(Input::Say),
    ]
}

fn render(input: &Input) -> String {
    match input {
        Input::Announce(name) => format!("{IDENTITY_MARKER}{name}"),
        Input::Say(text) => text.clone(),
    }
}

fn expected(inputs: &[Input]) -> Vec<(String, String)> {
    let mut label = String::new();
    let mut out = Vec::new();
    for input in inputs {
        match input {
            Input::Announce(name) if name.is_empty() => label.clear(),
            Input::Announce(name) => label = format!("{name}{LABEL_TERMINATOR}"),
            Input::Say(text) => out.push((label.clone(), text.clone())),
        }
    }
    out
}

proptest! {
    #[test]
    fn prop_label_is_most_recent_announcement(
        inputs in prop::collection::vec(input_strategy(), 0..40)
    ) {
        let mut identity = ConnectionIdentity::new();
        let actual: Vec<_> = inputs
            .iter()
            .filter_map(|input| identity.apply(render(input)))
            .map(fanin_proto::TaggedMessage::into_parts)
            .collect();

        prop_assert_eq!(actual, expected(&inputs));
    }

    #[test]
    fn prop_framing_preserves_order(
        lines in prop::collection::vec("[a-z]{0,12}", 0..30)
    ) {
        let wire: String = lines.iter().map(|l| format!("{l}\n")).collect();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        let framed = runtime.block_on(async {
            let mut framer = LineFramer::new(wire.as_bytes());
            let mut out = Vec::new();
            while let Some(line) = framer.next_line().await {
                out.push(line);
            }
            out
        });

        prop_assert_eq!(framed, lines);
    }
}
