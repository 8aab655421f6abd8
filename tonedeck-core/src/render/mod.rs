//! Front panel rendering
//!
//! The panel is never redrawn as a whole after startup. Each render call
//! touches only the cells belonging to what changed: the temperature line,
//! the numeric readout plus one parameter graph, or the selection marker.

pub mod layout;

use tonedeck_display::{
    CharacterDisplay, CharacterDisplayExt, DisplayError, GRAPH_BLOCK, GRAPH_BLOCK_SLOT,
};

use crate::params::{Parameter, ParameterKind, ParameterSet, Selection};
use layout::*;

/// Draws the front panel on a character display
pub struct Renderer<D> {
    display: D,
}

impl<D: CharacterDisplay> Renderer<D> {
    /// Wrap a display
    pub const fn new(display: D) -> Self {
        Self { display }
    }

    /// Underlying display
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Give the display back
    pub fn release(self) -> D {
        self.display
    }

    /// Register the graph glyph and draw the static frame
    ///
    /// Draws labels, the selection marker, every graph and the unit label,
    /// then marks volume dirty and runs an encoder render so the readout
    /// shows the selected value.
    pub fn draw_layout(
        &mut self,
        params: &mut ParameterSet,
        selection: Selection,
    ) -> Result<(), DisplayError> {
        self.display.define_glyph(GRAPH_BLOCK_SLOT, &GRAPH_BLOCK)?;

        for kind in ParameterKind::ALL {
            let row = kind.row();
            self.display.draw_at(0, row, kind.label())?;
            let marker = if kind == selection.current() { MARKER } else { " " };
            self.display.write_str(marker)?;
            self.display.write_str("|")?;
            self.draw_graph(params.get(kind))?;
            self.display.write_str("|")?;
        }
        self.display.draw_at(UNIT_COL, STATUS_ROW, "dB")?;

        params.mark_dirty(ParameterKind::Volume);
        self.render_encoder_change(params, selection)
    }

    /// Redraw the temperature line
    pub fn render_temperature(&mut self, celsius: f32) -> Result<(), DisplayError> {
        self.display.draw_at(0, STATUS_ROW, &temperature_text(celsius))
    }

    /// Redraw the readout for the selected parameter and one dirty graph
    ///
    /// Only the first dirty graph in priority order (volume, treble, bass)
    /// is redrawn and cleared; the rest wait for a later render.
    pub fn render_encoder_change(
        &mut self,
        params: &mut ParameterSet,
        selection: Selection,
    ) -> Result<(), DisplayError> {
        self.draw_readout(params.get(selection.current()))?;

        if let Some(param) = params.take_first_dirty().copied() {
            self.draw_graph(&param)?;
        }
        Ok(())
    }

    /// Move the marker to the new selection and show its value
    pub fn render_selection_change(
        &mut self,
        params: &mut ParameterSet,
        selection: Selection,
    ) -> Result<(), DisplayError> {
        for kind in ParameterKind::ALL {
            self.display.blank(MARKER_COL, kind.row(), 1)?;
        }
        self.display
            .draw_at(MARKER_COL, selection.current().row(), MARKER)?;
        self.display
            .blank(READOUT_CLEAR_COL, STATUS_ROW, READOUT_CLEAR_LEN)?;

        self.render_encoder_change(params, selection)
    }

    fn draw_readout(&mut self, param: &Parameter) -> Result<(), DisplayError> {
        match param.kind() {
            ParameterKind::Volume => {
                let field = volume_field(param.centi_db());
                self.write_field(field, &volume_text(param.db()))
            }
            ParameterKind::Treble | ParameterKind::Bass => {
                let db = param.centi_db() / 100;
                self.write_field(tone_field(db), &tone_text(db))
            }
        }
    }

    fn write_field(&mut self, field: ReadoutField, text: &str) -> Result<(), DisplayError> {
        if field.blank_len > 0 {
            self.display
                .blank(field.blank_col, STATUS_ROW, field.blank_len)?;
        }
        self.display.draw_at(field.text_col, STATUS_ROW, text)
    }

    fn draw_graph(&mut self, param: &Parameter) -> Result<(), DisplayError> {
        self.display.set_cursor(GRAPH_COL, param.kind().row())?;

        let filled = match param.kind() {
            ParameterKind::Volume => volume_segments(param.centi_db()),
            ParameterKind::Treble | ParameterKind::Bass => match tone_segments(param.centi_db()) {
                Some(n) => n,
                None => return self.display.write_str(FLAT),
            },
        };
        self.display.repeat_glyph(GRAPH_BLOCK_SLOT, filled)?;
        for _ in filled..GRAPH_WIDTH {
            self.display.write_str(" ")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Direction;
    use tonedeck_display::Screen;

    fn started() -> (Renderer<Screen>, ParameterSet, Selection) {
        let mut renderer = Renderer::new(Screen::new());
        let mut params = ParameterSet::new();
        let selection = Selection::new();
        renderer.draw_layout(&mut params, selection).unwrap();
        (renderer, params, selection)
    }

    fn line(renderer: &Renderer<Screen>, row: usize) -> heapless::String<20> {
        renderer.display().line(row)
    }

    #[test]
    fn test_startup_screen() {
        let (renderer, params, _) = started();
        assert_eq!(line(&renderer, 0).as_str(), "VOL>|##            |");
        assert_eq!(line(&renderer, 1).as_str(), "TRB |     FLAT     |");
        assert_eq!(line(&renderer, 2).as_str(), "BAS |     FLAT     |");
        assert_eq!(line(&renderer, 3).as_str(), "            -40.00dB");
        assert_eq!(renderer.display().glyph(GRAPH_BLOCK_SLOT), Some(GRAPH_BLOCK));
        assert!(params.iter().all(|p| !p.is_dirty()));
    }

    #[test]
    fn test_temperature_line() {
        let (mut renderer, _, _) = started();
        renderer.render_temperature(21.34).unwrap();
        assert_eq!(line(&renderer, 3).as_str(), "TEMP 21.3c  -40.00dB");
    }

    #[test]
    fn test_volume_change_redraws_readout_and_graph() {
        let (mut renderer, mut params, selection) = started();
        for _ in 0..8 {
            params.apply_delta(ParameterKind::Volume, Direction::Increase);
        }
        renderer.render_encoder_change(&mut params, selection).unwrap();
        assert_eq!(line(&renderer, 0).as_str(), "VOL>|#####         |");
        assert_eq!(&line(&renderer, 3)[12..], "-30.00dB");
    }

    #[test]
    fn test_volume_readout_at_zero_clears_sign() {
        let (mut renderer, mut params, selection) = started();
        for _ in 0..32 {
            params.apply_delta(ParameterKind::Volume, Direction::Increase);
            renderer.render_encoder_change(&mut params, selection).unwrap();
        }
        assert_eq!(&line(&renderer, 3)[10..], "    0.00dB");
        assert_eq!(line(&renderer, 0).as_str(), "VOL>|##############|");
    }

    #[test]
    fn test_selection_change_moves_marker() {
        let (mut renderer, mut params, mut selection) = started();
        selection.cycle();
        renderer
            .render_selection_change(&mut params, selection)
            .unwrap();
        assert_eq!(&line(&renderer, 0)[..5], "VOL |");
        assert_eq!(&line(&renderer, 1)[..5], "TRB>|");
        assert_eq!(&line(&renderer, 3)[10..], "       0dB");
    }

    #[test]
    fn test_tone_graph_and_readout() {
        let (mut renderer, mut params, mut selection) = started();
        selection.cycle();
        renderer
            .render_selection_change(&mut params, selection)
            .unwrap();

        for _ in 0..3 {
            params.apply_delta(ParameterKind::Treble, Direction::Decrease);
        }
        renderer.render_encoder_change(&mut params, selection).unwrap();
        assert_eq!(line(&renderer, 1).as_str(), "TRB>|#####         |");
        assert_eq!(&line(&renderer, 3)[15..], " -6dB");

        for _ in 0..7 {
            params.apply_delta(ParameterKind::Treble, Direction::Increase);
        }
        renderer.render_encoder_change(&mut params, selection).unwrap();
        assert_eq!(line(&renderer, 1).as_str(), "TRB>|###########   |");
        assert_eq!(&line(&renderer, 3)[15..], "  8dB");

        for _ in 0..3 {
            params.apply_delta(ParameterKind::Treble, Direction::Increase);
        }
        renderer.render_encoder_change(&mut params, selection).unwrap();
        assert_eq!(&line(&renderer, 3)[15..], " 14dB");
    }

    #[test]
    fn test_only_first_dirty_graph_redrawn() {
        let (mut renderer, mut params, selection) = started();
        params.apply_delta(ParameterKind::Treble, Direction::Increase);
        params.apply_delta(ParameterKind::Bass, Direction::Increase);

        renderer.render_encoder_change(&mut params, selection).unwrap();
        assert_eq!(line(&renderer, 1).as_str(), "TRB |########      |");
        assert_eq!(line(&renderer, 2).as_str(), "BAS |     FLAT     |");
        assert!(params.get(ParameterKind::Bass).is_dirty());

        renderer.render_encoder_change(&mut params, selection).unwrap();
        assert_eq!(line(&renderer, 2).as_str(), "BAS |########      |");
    }

    fn writes_during(
        renderer: &mut Renderer<Screen>,
        draw: impl FnOnce(&mut Renderer<Screen>),
    ) -> usize {
        let before = renderer.display().write_count();
        draw(renderer);
        renderer.display().write_count() - before
    }

    #[test]
    fn test_redraw_cell_counts() {
        let (mut renderer, mut params, mut selection) = started();

        // Readout only: "-40.00"
        let n = writes_during(&mut renderer, |r| {
            r.render_encoder_change(&mut params, selection).unwrap()
        });
        assert_eq!(n, 6);

        // Readout plus one 14-cell graph
        params.apply_delta(ParameterKind::Volume, Direction::Increase);
        let n = writes_during(&mut renderer, |r| {
            r.render_encoder_change(&mut params, selection).unwrap()
        });
        assert_eq!(n, 6 + 14);

        // Three marker blanks, the marker, the 8-cell clear, then "  0"
        selection.cycle();
        let n = writes_during(&mut renderer, |r| {
            r.render_selection_change(&mut params, selection).unwrap()
        });
        assert_eq!(n, 3 + 1 + 8 + 3);

        let n = writes_during(&mut renderer, |r| r.render_temperature(21.34).unwrap());
        assert_eq!(n, "TEMP 21.3c".len());
    }

    #[test]
    fn test_readout_only_touches_status_row() {
        let (mut renderer, mut params, selection) = started();
        let before: [_; 3] = core::array::from_fn(|row| line(&renderer, row));
        renderer.render_encoder_change(&mut params, selection).unwrap();
        for (row, text) in before.iter().enumerate() {
            assert_eq!(&line(&renderer, row), text);
        }
    }
}
