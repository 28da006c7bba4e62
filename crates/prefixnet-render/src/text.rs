//! Plain text layout
//!
//! One line per stage, bits from N-1 down to 0:
//!
//! ```text
//! Stage  0: b: 7=>(-1, 6) p: 6          b: 5=>(-1, 4) ...
//! ```

use prefixnet_core::{CellAnnotation, CellKind, PrefixNetwork, Stage};

/// Key for the cell tokens
pub const LEGEND: &str = "[black|grey|pass][bit]:(stage,bit)";

/// Summary line, e.g. `8 bits, 4 stages`
pub fn banner(network: &PrefixNetwork) -> String {
    format!("{} bits, {} stages", network.width, network.stage_count())
}

/// All stage lines, newline-terminated
pub fn render_text(network: &PrefixNetwork) -> String {
    let mut out = String::new();
    for stage in &network.stages {
        out.push_str(&render_stage(stage));
        out.push('\n');
    }
    out
}

/// A single stage line without the trailing newline
pub fn render_stage(stage: &Stage) -> String {
    let mut line = format!("Stage {:>2}: ", stage.index);
    for cell in &stage.cells {
        for annotation in &cell.annotations {
            line.push_str(&render_token(cell.position, annotation));
        }
    }
    line
}

/// Token for one annotation of bit `position`
pub fn render_token(position: usize, annotation: &CellAnnotation) -> String {
    let prefix = match annotation.kind() {
        CellKind::Black => 'b',
        CellKind::Grey | CellKind::GreyBottom => 'g',
        CellKind::Pass => 'p',
    };
    match annotation.target() {
        Some(target) => format!(
            "{}:{:>2}=>({:>2},{:>2}) ",
            prefix,
            position,
            annotation.source_stage(),
            target
        ),
        // padded to the width of a combine token
        None => format!("{}:{:>2}          ", prefix, position),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prefixnet_core::classify;

    #[test]
    fn test_tokens() {
        assert_eq!(render_token(7, &CellAnnotation::black(0, 6)), "b: 7=>(-1, 6) ");
        assert_eq!(render_token(3, &CellAnnotation::grey(1, 1)), "g: 3=>( 0, 1) ");
        assert_eq!(
            render_token(12, &CellAnnotation::grey_bottom(4, 11)),
            "g:12=>( 3,11) "
        );
        assert_eq!(render_token(0, &CellAnnotation::pass(2)), "p: 0          ");
    }

    #[test]
    fn test_tokens_share_column_width() {
        let black = render_token(7, &CellAnnotation::black(0, 6));
        let pass = render_token(6, &CellAnnotation::pass(0));
        assert_eq!(black.len(), pass.len());
    }

    #[test]
    fn test_banner() {
        assert_eq!(banner(&classify(8).unwrap()), "8 bits, 4 stages");
        assert_eq!(banner(&classify(1).unwrap()), "1 bits, 1 stages");
    }

    #[test]
    fn test_single_bit_text() {
        assert_eq!(render_text(&classify(1).unwrap()), "Stage  0: p: 0          \n");
    }
}
