//! Client configuration: service location and presentation timings.
//!
//! TRADE-OFFS
//! ==========
//! Only the API base is read from the page (`data-api-base` on `<body>`);
//! timings are compiled in. A page without the attribute talks to the origin
//! it was served from.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Presentation delays, in milliseconds. None of these affect the protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    /// How long a non-winning result stays up before the AI's turn starts.
    pub result_hold_ms: u32,
    /// Delay between accepted AI feedback and the human's next turn.
    pub handoff_ms: u32,
    /// Delay between a winning exchange and the win screen.
    pub win_reveal_ms: u32,
    /// Cadence of the AI guess reveal, per digit.
    pub ai_digit_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self { result_hold_ms: 1800, handoff_ms: 1200, win_reveal_ms: 1500, ai_digit_ms: 180 }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for service routes, without a trailing slash. Empty means same origin.
    pub api_base: String,
    pub timing: Timing,
}

impl ClientConfig {
    /// Build a config with the given API base, trimming any trailing slash.
    #[must_use]
    pub fn with_api_base(api_base: &str) -> Self {
        Self { api_base: api_base.trim().trim_end_matches('/').to_owned(), ..Self::default() }
    }

    /// Full URL for a service route such as `/human-turn`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }

    /// Read the config from the current page.
    pub fn from_document() -> Self {
        #[cfg(feature = "csr")]
        {
            let base = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body())
                .and_then(|body| body.get_attribute("data-api-base"));
            match base {
                Some(base) => Self::with_api_base(&base),
                None => Self::default(),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }

    /// Log level for the browser console.
    #[must_use]
    pub fn log_level() -> log::Level {
        if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info }
    }
}
