//! Websocket transport for the client.
//!
//! A thin layer that bridges mpsc channels to the websocket: outbound
//! [`ClientCommand`]s are encoded to named-event JSON text frames, inbound
//! text frames are decoded to [`ServerEvent`]s. All protocol logic stays
//! in `parlor-app`; this task only moves frames.

use futures::{SinkExt, StreamExt};
use parlor_proto::{ClientCommand, ServerEvent};
use thiserror::Error;
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message as WsMessage};

/// Transport errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection could not be established.
    #[error("connection failed: {0}")]
    Connect(String),
}

/// Inbound notifications from the transport task.
#[derive(Debug)]
pub enum TransportEvent {
    /// A decoded server event.
    Event(ServerEvent),

    /// The connection closed or failed.
    Closed,
}

/// Handle to an open websocket connection.
///
/// Commands and events flow through the channels; an internal task owns
/// the socket I/O.
pub struct Connection {
    /// Send commands to the server.
    pub to_server: mpsc::Sender<ClientCommand>,
    /// Receive events from the server.
    pub from_server: mpsc::Receiver<TransportEvent>,
    /// Abort handle to stop the connection task.
    abort_handle: tokio::task::AbortHandle,
}

impl Connection {
    /// Stop the connection task.
    pub fn stop(&self) {
        self.abort_handle.abort();
    }
}

type WsStream =
    tokio_tungstenite::WebSocketStream<tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>>;

/// Connect to a parlor server over websocket.
///
/// # Errors
///
/// Returns [`TransportError::Connect`] if the websocket handshake fails.
pub async fn connect(url: &str) -> Result<Connection, TransportError> {
    let (socket, _response) =
        connect_async(url).await.map_err(|e| TransportError::Connect(e.to_string()))?;

    let (to_server_tx, to_server_rx) = mpsc::channel::<ClientCommand>(32);
    let (from_server_tx, from_server_rx) = mpsc::channel::<TransportEvent>(32);

    let handle = tokio::spawn(run_connection(socket, to_server_rx, from_server_tx));

    Ok(Connection {
        to_server: to_server_tx,
        from_server: from_server_rx,
        abort_handle: handle.abort_handle(),
    })
}

/// Run the connection, bridging between the channels and the socket.
async fn run_connection(
    socket: WsStream,
    mut to_server: mpsc::Receiver<ClientCommand>,
    from_server: mpsc::Sender<TransportEvent>,
) {
    let (mut sink, mut stream) = socket.split();

    loop {
        tokio::select! {
            outbound = to_server.recv() => {
                let Some(command) = outbound else { break };
                match command.encode() {
                    Ok(text) => {
                        if sink.send(WsMessage::Text(text.into())).await.is_err() {
                            break;
                        }
                    },
                    Err(e) => tracing::error!(error = %e, "failed to encode command"),
                }
            }
            inbound = stream.next() => {
                match inbound {
                    Some(Ok(WsMessage::Text(text))) => match ServerEvent::decode(text.as_str()) {
                        Ok(event) => {
                            if from_server.send(TransportEvent::Event(event)).await.is_err() {
                                break;
                            }
                        },
                        // Protocol violation by the peer; drop the frame.
                        Err(e) => tracing::warn!(error = %e, "dropping undecodable event"),
                    },
                    Some(Ok(WsMessage::Close(_))) | Some(Err(_)) | None => break,
                    Some(Ok(_)) => {},
                }
            }
        }
    }

    let _ = from_server.send(TransportEvent::Closed).await;
}
