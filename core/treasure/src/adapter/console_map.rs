//! 地図キャンバスのコンソール描画

use crate::ports::outbound::{Annotation, MapCanvas};
use common::error::Error;
use common::geo::Region;

/// 標準出力にアノテーションと表示領域を描画する MapCanvas 実装
#[derive(Debug, Clone, Default)]
pub struct ConsoleMapCanvas;

impl MapCanvas for ConsoleMapCanvas {
    fn render_annotations(&self, annotations: &[Annotation]) -> Result<(), Error> {
        println!("map: {} annotation(s)", annotations.len());
        for a in annotations {
            println!("  * {} ({})", a.title, a.coordinate);
        }
        Ok(())
    }

    fn recenter(&self, region: &Region) -> Result<(), Error> {
        println!(
            "map: centered at ({}) span {} m",
            region.center, region.span_meters
        );
        Ok(())
    }
}
