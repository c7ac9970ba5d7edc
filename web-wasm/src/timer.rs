//! ブラウザのタイマー

use agri_assist_common::Timer;
use std::future::Future;
use std::time::Duration;

/// `setTimeout` による待機
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        gloo::timers::future::sleep(duration)
    }
}
