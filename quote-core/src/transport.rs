use std::io::{BufRead, BufReader};
use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::{CONNECTION, HeaderValue};

use crate::constants::SYMBOL_QUERY_PARAM;
use crate::error::{QuoteError, TransportError};

/// Источник сырых строк котировок
pub trait QuoteTransport: Send + Sync {
    /// Запрашивает котировку и возвращает первую строку ответа
    fn fetch(&self, symbol: &str) -> Result<String, QuoteError>;
}

/// HTTP GET к сервису котировок. Без ретраев и кеша.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    /// Создаёт транспорт с таймаутами соединения и запроса
    pub fn new(
        base_url: &str,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, TransportError> {
        let base_url = Url::parse(base_url).map_err(|e| TransportError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        // без пула: соединение живёт ровно один fetch
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(TransportError::Client)?;

        Ok(Self { client, base_url })
    }

    /// Адрес запроса для тикера
    pub fn request_url(&self, symbol: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair(SYMBOL_QUERY_PARAM, symbol);
        url
    }
}

impl QuoteTransport for HttpTransport {
    fn fetch(&self, symbol: &str) -> Result<String, QuoteError> {
        let url = self.request_url(symbol);

        let response = self
            .client
            .get(url.clone())
            .header(CONNECTION, HeaderValue::from_static("close"))
            .send()
            .map_err(TransportError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        // Connection: close + пустой пул => после drop(reader) сокет закрыт
        let mut reader = BufReader::new(response);
        read_first_line(&mut reader)
    }
}

fn read_first_line<R: BufRead>(reader: &mut R) -> Result<String, QuoteError> {
    let mut line = String::new();
    let n = reader.read_line(&mut line).map_err(TransportError::Read)?;

    if n == 0 {
        return Err(QuoteError::EmptyResponse);
    }

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
