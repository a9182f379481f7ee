use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior, interval_at, sleep};

/// Height of the fixed header the anchor is aligned below, in CSS pixels.
pub const HEADER_OFFSET: f64 = 80.0;

/// Delay between anchor lookups.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Lookups before the scroller gives up.
pub const MAX_ATTEMPTS: u32 = 20;

/// Delay between finding the anchor and scrolling to it.
pub const SCROLL_DELAY: Duration = Duration::from_millis(100);

/// Something that can report where an anchor sits in the document.
pub trait AnchorTarget {
    /// Document-relative top offset of the element with DOM id `id`, or
    /// `None` while it is not rendered.
    fn locate(&self, id: &str) -> Option<f64>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollOutcome {
    Aligned { top: f64, attempts: u32 },
    GaveUp { attempts: u32 },
}

/// Best-effort scroll to a fragment whose content may render late.
///
/// Dropping the future returned by [`HashScroller::run`] cancels the poll.
#[derive(Debug, Clone, Copy)]
pub struct HashScroller {
    pub interval: Duration,
    pub max_attempts: u32,
    pub header_offset: f64,
}

impl Default for HashScroller {
    fn default() -> Self {
        Self {
            interval: POLL_INTERVAL,
            max_attempts: MAX_ATTEMPTS,
            header_offset: HEADER_OFFSET,
        }
    }
}

impl HashScroller {
    pub async fn run<T: AnchorTarget + ?Sized>(&self, target: &T, id: &str) -> ScrollOutcome {
        let mut ticker = interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut attempts = 0;
        while attempts < self.max_attempts {
            ticker.tick().await;
            attempts += 1;

            if let Some(found_at) = target.locate(id) {
                sleep(SCROLL_DELAY).await;
                // Layout may shift while the delay runs.
                let position = target.locate(id).unwrap_or(found_at);
                tracing::debug!(anchor = id, attempts, "Anchor found");
                return ScrollOutcome::Aligned {
                    top: (position - self.header_offset).max(0.0),
                    attempts,
                };
            }
        }

        tracing::debug!(anchor = id, attempts, "Anchor never appeared");
        ScrollOutcome::GaveUp { attempts }
    }

    /// Client-side equivalent of [`HashScroller::run`], embedded in every page.
    pub fn script(&self) -> String {
        format!(
            r#"(function () {{
  var id = decodeURIComponent(window.location.hash.replace('#', ''));
  if (!id) {{
    if (window.location.pathname === '/') window.scrollTo({{ top: 0, behavior: 'smooth' }});
    return;
  }}
  var attempts = 0;
  var timer = setInterval(function () {{
    var el = document.getElementById(id);
    if (el) {{
      clearInterval(timer);
      setTimeout(function () {{
        var top = el.getBoundingClientRect().top + window.scrollY - {offset};
        window.scrollTo({{ top: Math.max(top, 0), behavior: 'smooth' }});
      }}, {delay});
    }} else if (++attempts >= {max}) {{
      clearInterval(timer);
    }}
  }}, {interval});
  window.addEventListener('pagehide', function () {{ clearInterval(timer); }});
}})();"#,
            offset = self.header_offset,
            delay = SCROLL_DELAY.as_millis(),
            max = self.max_attempts,
            interval = self.interval.as_millis(),
        )
    }
}
