//! End-to-end fan-in tests over loopback TCP.
//!
//! # Oracle Pattern
//!
//! Real clients connect to a bound [`Server`]; the test plays the render loop
//! by draining the dispatcher inbox. Tests end with oracle checks that
//! verify:
//! - Identity lines never produce messages
//! - Each message carries its own connection's latest identity
//! - Per-connection order survives concurrent senders
//! - A vanished peer does not disturb the others

use std::time::Duration;

use fanin_app::{AppEvent, EventInbox, channel};
use fanin_proto::{TaggedMessage, announce};
use fanin_server::{Server, ServerConfig, ServerError};
use tokio::{io::AsyncWriteExt, net::TcpStream, time::timeout};

const WAIT: Duration = Duration::from_secs(5);

fn loopback() -> ServerConfig {
    ServerConfig { bind_address: "127.0.0.1:0".to_string(), ..ServerConfig::default() }
}

/// Bind a server, start its accept loop and return its address and inbox.
async fn start() -> (std::net::SocketAddr, EventInbox) {
    let config = loopback();
    let server = Server::bind(&config).await.unwrap();
    let addr = server.local_addr().unwrap();
    let (tx, inbox) = channel(config.event_capacity);
    tokio::spawn(server.run(tx));
    (addr, inbox)
}

async fn next_message(inbox: &mut EventInbox) -> TaggedMessage {
    match timeout(WAIT, inbox.next()).await {
        Ok(Some(AppEvent::Message(message))) => message,
        other => panic!("expected a message, got {other:?}"),
    }
}

#[tokio::test]
async fn announced_name_tags_following_message() {
    let (addr, mut inbox) = start().await;

    let mut client = TcpStream::connect(addr).await.unwrap();
    client.write_all(announce("Alice").as_bytes()).await.unwrap();
    client.write_all(b"hello\n").await.unwrap();

    let message = next_message(&mut inbox).await;
    assert_eq!(message, TaggedMessage::new("Alice: ", "hello"));

    // Nothing else: the name line was swallowed.
    assert!(timeout(Duration::from_millis(100), inbox.next()).await.is_err());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_clients_keep_per_connection_order() {
    let (addr, mut inbox) = start().await;

    let mut senders = Vec::new();
    for name in ["Ann", "Ben"] {
        senders.push(tokio::spawn(async move {
            let mut client = TcpStream::connect(addr).await.unwrap();
            client.write_all(announce(name).as_bytes()).await.unwrap();
            for n in 0..100 {
                client.write_all(format!("{name} {n}\n").as_bytes()).await.unwrap();
            }
            client.shutdown().await.unwrap();
        }));
    }

    let mut received = Vec::new();
    for _ in 0..200 {
        received.push(next_message(&mut inbox).await);
    }
    for sender in senders {
        sender.await.unwrap();
    }

    for name in ["Ann", "Ben"] {
        let label = format!("{name}: ");
        let texts: Vec<&str> = received
            .iter()
            .filter(|m| m.identity() == label)
            .map(TaggedMessage::text)
            .collect();
        let expected: Vec<String> = (0..100).map(|n| format!("{name} {n}")).collect();
        assert_eq!(texts, expected, "order for {name}");
    }
}

#[tokio::test]
async fn abrupt_disconnect_after_name_is_silent() {
    let (addr, mut inbox) = start().await;

    let mut bob = TcpStream::connect(addr).await.unwrap();
    bob.write_all(announce("Bob").as_bytes()).await.unwrap();
    drop(bob);

    let mut carol = TcpStream::connect(addr).await.unwrap();
    carol.write_all(b"still here\n").await.unwrap();

    let message = next_message(&mut inbox).await;
    assert_eq!(message, TaggedMessage::new("", "still here"));

    let mut dave = TcpStream::connect(addr).await.unwrap();
    dave.write_all(b"me too\n").await.unwrap();
    assert_eq!(next_message(&mut inbox).await, TaggedMessage::new("", "me too"));
}

#[tokio::test]
async fn identities_are_per_connection() {
    let (addr, mut inbox) = start().await;

    let mut named = TcpStream::connect(addr).await.unwrap();
    named.write_all(announce("Eve").as_bytes()).await.unwrap();
    named.write_all(b"first\n").await.unwrap();
    assert_eq!(next_message(&mut inbox).await, TaggedMessage::new("Eve: ", "first"));

    let mut anonymous = TcpStream::connect(addr).await.unwrap();
    anonymous.write_all(b"second\n").await.unwrap();
    assert_eq!(next_message(&mut inbox).await, TaggedMessage::new("", "second"));
}

#[tokio::test]
async fn bind_failure_is_reported() {
    let first = Server::bind(&loopback()).await.unwrap();
    let taken = first.local_addr().unwrap().to_string();

    let config = ServerConfig { bind_address: taken.clone(), ..ServerConfig::default() };
    match Server::bind(&config).await {
        Err(ServerError::Bind { address, .. }) => assert_eq!(address, taken),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("second bind to {taken} succeeded"),
    }
}

#[tokio::test]
async fn listener_stops_with_render_loop() {
    let config = loopback();
    let server = Server::bind(&config).await.unwrap();
    let (tx, inbox) = channel(1);
    let handle = tokio::spawn(server.run(tx));

    drop(inbox);
    timeout(WAIT, handle).await.unwrap().unwrap();
}
