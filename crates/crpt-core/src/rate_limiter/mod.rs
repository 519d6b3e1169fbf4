//! Time-window rate limiting for outbound API calls
//!
//! Caps the number of calls issued per window and suspends callers once the
//! cap is reached until the next window starts.

mod limiter;
mod replenish;
mod state;


pub use limiter::RateLimiter;
