use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "agri-assist")]
#[command(about = "AgriAI スマート農業ダッシュボード", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画面の内容を表示
    Screen {
        /// 画面ID（dashboard, plant-disease, soil-analysis, weather,
        /// crop-recommendation, data-insights）。省略時は設定の既定画面
        id: Option<String>,

        /// 土壌分析の圃場
        #[arg(long)]
        field: Option<String>,

        /// 作物推奨の季節
        #[arg(long)]
        season: Option<String>,

        /// データ分析の指標
        #[arg(long)]
        metric: Option<String>,

        /// 気象パターン・データ分析の期間
        #[arg(long)]
        period: Option<String>,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 植物画像の病害スキャン（疑似解析）
    Scan {
        /// 画像ファイル
        #[arg(required = true)]
        image: PathBuf,

        /// 解析の待ち時間（ミリ秒、省略時は設定値）
        #[arg(long)]
        delay_ms: Option<u64>,

        /// 解析のタイムアウト（秒、省略時は設定値）
        #[arg(long)]
        timeout_secs: Option<u64>,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 対話的に画面を切り替えて閲覧
    Browse,

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 疑似解析の待ち時間（ミリ秒）を設定
        #[arg(long)]
        set_scan_delay: Option<u64>,

        /// 起動時の画面を設定
        #[arg(long)]
        set_default_screen: Option<String>,
    },
}
