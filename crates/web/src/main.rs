use catalog::client::Client;
use database::{DatabaseConnectionInfo, PgDatabase};
use web::{start_web_server, AdminCredentials, WebState};

#[tokio::main]
async fn main() {
    env_logger::init();

    // database
    let database_connection_info = DatabaseConnectionInfo::from_env()
        .expect("expected database connection info in env.");
    let database = PgDatabase::connect(database_connection_info)
        .await
        .expect("could not connect to database.");

    // admin back office
    let admin_credentials = AdminCredentials::from_env()
        .expect("expected ADMIN_EMAIL and ADMIN_PASSWORD in env.");

    let catalog_client = Client::new(database);
    match catalog_client.purge_expired_sessions().await {
        Ok(purged) if purged > 0 => log::info!("purged {} expired sessions", purged),
        Ok(_) => {}
        Err(why) => log::warn!("could not purge expired sessions: {:?}", why),
    }

    // web server
    let web_future = start_web_server(WebState {
        catalog_client,
        admin_credentials,
    });

    let _ = web_future.await;
}
