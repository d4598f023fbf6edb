use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use rental_platform::config::environment::EnvironmentConfig;
use rental_platform::create_app;
use rental_platform::database::DatabaseConnection;
use rental_platform::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::default();

    // Configurar logging: DEBUG en desarrollo, INFO en el resto
    let level = if config.is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("🚗 Vehicle Rental Platform - API");
    info!("================================");
    info!("🌎 Entorno: {}", config.environment);

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    // Crear router de la API
    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = AppState::new(pool, config);
    let app = create_app(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔐 Auth:");
    info!("   POST /api/auth/register - Registrar usuario");
    info!("   POST /api/auth/login - Login");
    info!("   GET  /api/auth/me - Usuario actual");
    info!("🚙 Rental:");
    info!("   POST /api/rental - Crear rental (cuenta activa)");
    info!("   GET  /api/rental - Listar rentals propios");
    info!("   GET  /api/rental/:id - Obtener rental");
    info!("   POST /api/rental/:id/cancel - Cancelar rental");
    info!("   PUT  /api/rental/:id/status - Override de estado (admin)");
    info!("📦 Order:");
    info!("   POST /api/order - Crear order desde rental");
    info!("   GET  /api/order/user - Orders propios con conteo de tracking");
    info!("   GET  /api/order/rental/:rental_id - Order por rental");
    info!("   GET  /api/order/:id - Order con historial de tracking");
    info!("   PUT  /api/order/:id/status - Actualizar estado de entrega");
    info!("🚫 Cancellation:");
    info!("   POST /api/cancellation/order/:order_id - Solicitar cancelación");
    info!("   GET  /api/cancellation/order/:order_id - Solicitudes del order");
    info!("   GET  /api/cancellation/pending - Cola pendiente (admin)");
    info!("🪪 KYC:");
    info!("   POST /api/kyc/submit - Enviar documentos");
    info!("   GET  /api/kyc/me - Estado de verificación propio");
    info!("   POST /api/kyc/verify/:user_id - Aprobar/rechazar (admin)");
    info!("🔔 Notification:");
    info!("   POST /api/notification/send - Enviar (admin/interno)");
    info!("   GET  /api/notification - Listar propias");
    info!("   PUT  /api/notification/:id/read - Marcar leída");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
