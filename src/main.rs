use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use tokio::net::TcpListener;

mod handler;
mod http;
mod logger;

/// Fixed listen port; there is no configuration of any kind.
const PORT: u16 = 8000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn std::error::Error>> {
    let addr = SocketAddr::from(([0, 0, 0, 0], PORT));
    let listener = create_listener(addr)?;

    logger::log_server_start(PORT);

    loop {
        match listener.accept().await {
            Ok((stream, _peer_addr)) => handle_connection(stream),
            Err(e) => logger::log_accept_error(&e),
        }
    }
}

/// Serve a single connection in a spawned task.
///
/// The handler never errors, so the only failures surfacing here are
/// protocol-level ones from hyper; those are logged and the
/// connection dropped.
fn handle_connection(stream: tokio::net::TcpStream) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().serve_connection(io, service_fn(handler::handle_request));

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}

/// Create a `TcpListener` with `SO_REUSEADDR` enabled.
///
/// Allows rebinding the port while a previous socket lingers in
/// TIME_WAIT after a restart.
fn create_listener(addr: SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;

    // Non-blocking mode for async compatibility
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}
