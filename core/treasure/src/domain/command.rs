//! 対話プロンプトの 1 行入力をスクリーン操作に解析するドメイン型

use crate::domain::category::CategoryFilter;
use common::error::Error;
use common::geo::{parse_lat_lon, Coordinate};

/// スクリーンへの操作コマンド
///
/// 行番号はユーザー向けに 1 始まりで受け取り、解析時に 0 始まりへ変換する。
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenCommand {
    Help,
    /// visible の行を描画し直す
    List,
    /// 保存済みアノテーションへ戻す（検索結果の表示を終える）
    ShowSaved,
    Filter(CategoryFilter),
    /// 地図タップ相当: 座標を指定して名前入力へ進む
    Add(Coordinate),
    /// スワイプ削除相当（0 始まりの visible index）
    Delete(usize),
    /// 行タップ相当: 選択して外部ナビゲーションを開く
    Open(usize),
    /// 選択中のポイントを共有する
    Share,
    Search(String),
    /// 現在位置の取得と近隣検索
    Locate,
    Quit,
}

impl ScreenCommand {
    /// 1 行の入力をコマンドに解析する。空行は Ok(None)。
    pub fn parse(line: &str) -> Result<Option<ScreenCommand>, Error> {
        let mut parts = line.split_whitespace();
        let head = match parts.next() {
            Some(h) => h,
            None => return Ok(None),
        };
        let rest: Vec<&str> = parts.collect();

        let cmd = match head.to_lowercase().as_str() {
            "help" | "?" => ScreenCommand::Help,
            "list" | "rows" => ScreenCommand::List,
            "show" | "back" => ScreenCommand::ShowSaved,
            "filter" => {
                let arg = rest.first().ok_or_else(|| {
                    Error::invalid_argument("filter requires a category: all, food, cafe, other")
                })?;
                let filter = CategoryFilter::parse(arg).ok_or_else(|| {
                    Error::invalid_argument(format!(
                        "Unknown category '{}'. Use all, food, cafe or other.",
                        arg
                    ))
                })?;
                ScreenCommand::Filter(filter)
            }
            "add" | "tap" => ScreenCommand::Add(coordinate_arg(&rest)?),
            "delete" | "del" => ScreenCommand::Delete(row_arg(&rest)?),
            "open" => ScreenCommand::Open(row_arg(&rest)?),
            "share" => ScreenCommand::Share,
            "search" => {
                if rest.is_empty() {
                    return Err(Error::empty_input("search requires a query"));
                }
                ScreenCommand::Search(rest.join(" "))
            }
            "locate" | "near" => ScreenCommand::Locate,
            "quit" | "exit" | "q" => ScreenCommand::Quit,
            other => {
                return Err(Error::invalid_argument(format!(
                    "Unknown command: {}. Type 'help' for commands.",
                    other
                )))
            }
        };
        Ok(Some(cmd))
    }

    /// ログ用のコマンド名
    pub fn name(&self) -> &'static str {
        match self {
            ScreenCommand::Help => "help",
            ScreenCommand::List => "list",
            ScreenCommand::ShowSaved => "show",
            ScreenCommand::Filter(_) => "filter",
            ScreenCommand::Add(_) => "add",
            ScreenCommand::Delete(_) => "delete",
            ScreenCommand::Open(_) => "open",
            ScreenCommand::Share => "share",
            ScreenCommand::Search(_) => "search",
            ScreenCommand::Locate => "locate",
            ScreenCommand::Quit => "quit",
        }
    }
}

/// "43.66,-79.38" または "43.66 -79.38" の 2 形式を受け付ける
fn coordinate_arg(rest: &[&str]) -> Result<Coordinate, Error> {
    let joined = match rest {
        [] => {
            return Err(Error::invalid_argument(
                "add requires a coordinate, e.g. add 43.66,-79.38",
            ))
        }
        [lat, lon] if !lat.contains(',') => format!("{},{}", lat, lon),
        parts => parts.join(" "),
    };
    parse_lat_lon(&joined)
}

/// 1 始まりの行番号を 0 始まりの visible index に変換する
fn row_arg(rest: &[&str]) -> Result<usize, Error> {
    let arg = rest
        .first()
        .ok_or_else(|| Error::invalid_argument("A row number is required (rows start at 1)"))?;
    let n: usize = arg
        .parse()
        .map_err(|_| Error::invalid_argument(format!("Invalid row number: {}", arg)))?;
    n.checked_sub(1)
        .ok_or_else(|| Error::invalid_argument("Row numbers start at 1"))
}
