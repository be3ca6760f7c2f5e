use crate::sql::{
    destination::TableDestination,
    encoder::PgCopyValueEncoder,
    error::{ConnectorError, DbError},
    generator,
};
use async_trait::async_trait;
use bytes::Bytes;
use futures_util::{SinkExt, pin_mut};
use model::{records::row::RowData, schema::TableSchema};
use native_tls::TlsConnector;
use postgres_native_tls::MakeTlsConnector;
use tokio_postgres::{Client, Config, NoTls, config::SslMode};
use tracing::{debug, error, warn};

/// Discrete connection parameters, assembled into a driver config by the
/// caller at process start.
#[derive(Debug, Clone)]
pub struct PgConnectionParams {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub db: String,
}

impl PgConnectionParams {
    pub fn to_config(&self) -> Config {
        let mut config = Config::new();
        config
            .user(&self.user)
            .password(&self.password)
            .host(&self.host)
            .port(self.port)
            .dbname(&self.db);
        config
    }
}

pub async fn connect_client(config: &Config) -> Result<Client, ConnectorError> {
    let ssl_mode = config.get_ssl_mode();

    match ssl_mode {
        SslMode::Disable => connect_without_tls(config.clone()).await,
        SslMode::Require => connect_with_tls(config.clone()).await,
        SslMode::Prefer => match connect_with_tls(config.clone()).await {
            Ok(client) => Ok(client),
            Err(error) => {
                warn!(%error, "Postgres TLS handshake failed, retrying without TLS");
                connect_without_tls(config.clone()).await
            }
        },
        _ => connect_with_tls(config.clone()).await,
    }
}

async fn connect_with_tls(config: Config) -> Result<Client, ConnectorError> {
    let connector = TlsConnector::builder().build()?;
    let tls = MakeTlsConnector::new(connector);
    let (client, connection) = config.connect(tls).await?;
    tokio::spawn(async move {
        if let Err(err) = connection.await {
            error!(%err, "Postgres connection error");
        }
    });
    Ok(client)
}

async fn connect_without_tls(config: Config) -> Result<Client, ConnectorError> {
    let (client, connection) = config.connect(NoTls).await?;
    tokio::spawn(async move {
        if let Err(err) = connection.await {
            error!(%err, "Postgres connection error");
        }
    });
    Ok(client)
}

pub struct PgDestination {
    client: Client,
}

impl PgDestination {
    pub fn new(client: Client) -> Self {
        PgDestination { client }
    }

    pub async fn connect(params: &PgConnectionParams) -> Result<Self, ConnectorError> {
        let client = connect_client(&params.to_config()).await?;
        Ok(PgDestination::new(client))
    }
}

#[async_trait]
impl TableDestination for PgDestination {
    async fn create_table(&self, schema: &TableSchema) -> Result<(), DbError> {
        let sql = format!(
            "{}\n{}",
            generator::drop_table(&schema.name),
            generator::create_table(schema)
        );
        debug!("Creating table with SQL: {sql}");
        self.client.batch_execute(&sql).await?;
        Ok(())
    }

    async fn append_rows(&self, schema: &TableSchema, rows: &[RowData]) -> Result<u64, DbError> {
        if rows.is_empty() {
            return Ok(0);
        }

        let statement = generator::copy_from_stdin(schema);
        let encoder = PgCopyValueEncoder::new();

        debug!("COPY statement: {statement}");

        let sink = self.client.copy_in(&statement).await?;
        pin_mut!(sink);

        for row in rows {
            let mut line = String::new();
            for (i, col) in schema.columns.iter().enumerate() {
                if i > 0 {
                    line.push(',');
                }
                let encoded = match row.get(&col.name).and_then(|f| f.value.as_ref()) {
                    Some(value) => encoder.encode_value(value),
                    None => encoder.encode_null(),
                };
                line.push_str(&encoded);
            }
            line.push('\n');
            sink.as_mut().send(Bytes::from(line)).await?;
        }

        let written = sink.finish().await?;
        Ok(written)
    }
}
