//! 病害スキャンの非同期処理
//!
//! 解析タスクは中断可能なfutureとして起動し、画像の差し替えと画面の
//! アンマウントで中断する。中断が間に合わなかった結果もチケット照合で捨てられる。

use agri_assist_common::upload::accepts_mime;
use agri_assist_common::{analyze, ScanError, ScanSession, ScanSettings, SimulatedClassifier};
use futures::future::{abortable, AbortHandle};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::timer::BrowserTimer;

#[derive(Clone, Copy)]
pub struct ScanController {
    pub session: RwSignal<ScanSession>,
    pub upload_error: RwSignal<Option<String>>,
    pending: StoredValue<Option<AbortHandle>>,
    settings: ScanSettings,
}

impl ScanController {
    /// 現在のオーナー（画面）に紐づけて作る。画面が破棄されると解析も中断する
    pub fn new(settings: ScanSettings) -> Self {
        let controller = Self {
            session: RwSignal::new(ScanSession::new()),
            upload_error: RwSignal::new(None),
            pending: StoredValue::new(None),
            settings,
        };
        on_cleanup(move || controller.abort_pending());
        controller
    }

    /// ファイル選択の結果を読み込んでセッションに渡す
    pub fn load_file(&self, file: web_sys::File) {
        let name = file.name();
        let mime_type = file.type_();
        // 種別不明のファイルはデコードで判定する
        if !mime_type.is_empty() && !accepts_mime(&mime_type) {
            self.reject(
                ScanError::InvalidInput(format!("{name} ({mime_type}) is not a supported image"))
                    .to_string(),
            );
            return;
        }

        let controller = *self;
        spawn_local(async move {
            let blob = gloo::file::File::from(file);
            match gloo::file::futures::read_as_bytes(&blob).await {
                Ok(bytes) => controller.submit(&name, &bytes),
                Err(e) => controller.reject(format!("Could not read {name}: {e}")),
            }
        });
    }

    /// 画像を受け付ける（差し替えも同じ）
    pub fn submit(&self, file_name: &str, bytes: &[u8]) {
        match self.session.try_update(|s| s.submit_image(file_name, bytes)) {
            Some(Ok(())) => {
                self.abort_pending();
                self.upload_error.set(None);
                log::info!("image accepted: {file_name} ({} bytes)", bytes.len());
            }
            Some(Err(e)) => self.reject(e.to_string()),
            None => {}
        }
    }

    /// 解析を開始する。画像がない、または解析中なら何もしない
    pub fn start(&self) {
        let Some((ticket, image)) = self.session.try_update(|s| s.begin()).flatten() else {
            return;
        };
        self.abort_pending();

        let session = self.session;
        let settings = self.settings;
        let (task, handle) = abortable(async move {
            let classifier = SimulatedClassifier::new(BrowserTimer, settings.delay());
            let outcome = analyze(&classifier, &BrowserTimer, &image, settings.timeout()).await;
            match session.try_update(|s| s.complete(ticket, outcome)) {
                Some(Ok(())) => log::info!("analysis finished for {}", image.file_name),
                Some(Err(_)) => log::debug!("stale analysis result dropped"),
                None => log::debug!("scan screen disposed before analysis finished"),
            }
        });

        self.pending.set_value(Some(handle));
        spawn_local(async move {
            if task.await.is_err() {
                log::debug!("analysis task aborted");
            }
        });
    }

    /// 進行中の解析を取り消す。画像は残る
    pub fn cancel(&self) {
        self.abort_pending();
        self.session.update(|s| s.cancel());
    }

    fn reject(&self, message: String) {
        log::warn!("{message}");
        self.upload_error.try_set(Some(message));
    }

    fn abort_pending(&self) {
        if let Some(Some(handle)) = self.pending.try_update_value(|h| h.take()) {
            handle.abort();
        }
    }
}
