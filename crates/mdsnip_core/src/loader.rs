use std::path::Path;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::Url;
use reqwest::header::ACCEPT;

use crate::RuntimeConfig;
use crate::SnipError;
use crate::SnipResult;

/// Identifying user-agent sent with every remote fetch.
pub const USER_AGENT: &str = "mdsnip";

/// Read a resolved local snippet file as UTF-8 text. Existence is checked
/// upstream by the engine so a missing file surfaces as a clean warning
/// instead of a load error.
pub fn load_local(path: &Path) -> SnipResult<String> {
	Ok(std::fs::read_to_string(path)?)
}

/// Validate that a URL is acceptable for fetching: `https` always, `http`
/// only when the config allows insecure fetches, nothing else.
pub fn validate_remote_url(url: &Url, config: &RuntimeConfig) -> SnipResult<()> {
	match url.scheme() {
		"https" => Ok(()),
		"http" if config.allow_insecure_http => Ok(()),
		"http" => Err(SnipError::InsecureHttp {
			url: url.to_string(),
		}),
		other => Err(SnipError::RemoteScheme {
			scheme: other.to_string(),
		}),
	}
}

/// Fetch a remote snippet over HTTP(S), bounded by the configured timeout.
///
/// The fragment is stripped before the request (servers never receive it).
/// A 404 and a timeout each map to their own error variant so reports can
/// distinguish them from generic HTTP failures.
pub fn load_remote(url: &str, config: &RuntimeConfig) -> SnipResult<String> {
	let mut parsed = Url::parse(url).map_err(|e| {
		SnipError::RemoteUrl {
			url: url.to_string(),
			reason: e.to_string(),
		}
	})?;

	validate_remote_url(&parsed, config)?;
	parsed.set_fragment(None);

	tracing::debug!(url = %parsed, timeout_ms = config.remote_timeout_ms, "fetching remote snippet");

	let client = reqwest::blocking::Client::builder()
		.timeout(Duration::from_millis(config.remote_timeout_ms))
		.user_agent(USER_AGENT)
		.build()
		.map_err(|e| {
			SnipError::RemoteFetch {
				url: url.to_string(),
				reason: e.to_string(),
			}
		})?;

	let response = client
		.get(parsed)
		.header(ACCEPT, "text/plain, */*")
		.send()
		.map_err(|e| {
			if e.is_timeout() {
				SnipError::RemoteTimeout {
					url: url.to_string(),
					timeout_ms: config.remote_timeout_ms,
				}
			} else {
				SnipError::RemoteFetch {
					url: url.to_string(),
					reason: e.to_string(),
				}
			}
		})?;

	let status = response.status();
	if status == StatusCode::NOT_FOUND {
		return Err(SnipError::RemoteNotFound {
			url: url.to_string(),
		});
	}
	if !status.is_success() {
		return Err(SnipError::RemoteStatus {
			url: url.to_string(),
			status: status.as_u16(),
		});
	}

	response.text().map_err(|e| {
		SnipError::RemoteFetch {
			url: url.to_string(),
			reason: e.to_string(),
		}
	})
}
