//! 行リストのコンソール描画

use crate::domain::PointOfInterest;
use crate::ports::outbound::RowView;
use common::error::Error;

/// 標準出力に行を描画する RowView 実装
///
/// 行番号は 1 始まりで表示し、delete / open コマンドの引数に対応させる。
#[derive(Debug, Clone, Default)]
pub struct ConsoleRowView;

impl RowView for ConsoleRowView {
    fn render_rows(&self, rows: &[PointOfInterest]) -> Result<(), Error> {
        if rows.is_empty() {
            println!("(no treasures)");
            return Ok(());
        }
        for (i, point) in rows.iter().enumerate() {
            match point.image_tag() {
                Some(tag) => println!(
                    "{:>3}. {}  ({})  [{}]",
                    i + 1,
                    point.name(),
                    point.coordinate(),
                    tag
                ),
                None => println!("{:>3}. {}  ({})", i + 1, point.name(), point.coordinate()),
            }
        }
        Ok(())
    }
}
