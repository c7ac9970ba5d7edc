//! 病害診断画面の固定データ

use serde::Serialize;

/// 過去のスキャン履歴（表示のみ）
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RecentScan {
    pub image_url: &'static str,
    pub disease: &'static str,
    pub confidence: u8,
}

impl RecentScan {
    pub fn is_healthy(&self) -> bool {
        self.disease == "Healthy"
    }
}

pub const RECENT_SCANS: &[RecentScan] = &[
    RecentScan {
        image_url: "https://images.pexels.com/photos/1072824/pexels-photo-1072824.jpeg?auto=compress&cs=tinysrgb&w=100&h=100&fit=crop",
        disease: "Healthy",
        confidence: 98,
    },
    RecentScan {
        image_url: "https://images.pexels.com/photos/1459340/pexels-photo-1459340.jpeg?auto=compress&cs=tinysrgb&w=100&h=100&fit=crop",
        disease: "Leaf Spot",
        confidence: 87,
    },
    RecentScan {
        image_url: "https://images.pexels.com/photos/1459339/pexels-photo-1459339.jpeg?auto=compress&cs=tinysrgb&w=100&h=100&fit=crop",
        disease: "Powdery Mildew",
        confidence: 92,
    },
];
