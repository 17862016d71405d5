use hickory_server::ServerFuture;
use resolvr_infrastructure::dns::ZoneRequestHandler;
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tracing::info;

/// Serves DNS over UDP until the listener fails. A bind failure is returned
/// to the caller.
pub async fn start_dns_server(bind_addr: String, handler: ZoneRequestHandler) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;

    let socket = UdpSocket::bind(socket_addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind DNS listener on {}: {}", socket_addr, e))?;

    let mut server = ServerFuture::new(handler);
    server.register_socket(socket);

    info!(bind_address = %socket_addr, "DNS server ready");

    server.block_until_done().await?;
    Ok(())
}
