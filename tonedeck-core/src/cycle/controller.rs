//! Controller tying inputs, model, chip and panel together

use super::{CycleReport, FaultCounters, State};
use crate::config::ControllerConfig;
use crate::input::{InputSampler, Intent};
use crate::params::ParameterKind;
use crate::render::Renderer;
use crate::traits::{
    CharacterDisplay, PushButton, RotaryEncoder, TemperatureSensor, ToneProcessor,
};

/// The tone controller main cycle
///
/// Owns the hardware capabilities and the [`State`]. Construct it, call
/// [`start`](Self::start) once, then [`step`](Self::step) forever.
pub struct Controller<E, B, S, P, D> {
    encoder: E,
    button: B,
    sensor: S,
    processor: P,
    renderer: Renderer<D>,
    state: State,
    faults: FaultCounters,
}

impl<E, B, S, P, D> Controller<E, B, S, P, D>
where
    E: RotaryEncoder,
    B: PushButton,
    S: TemperatureSensor,
    P: ToneProcessor,
    D: CharacterDisplay,
{
    /// Create a controller in the power-on state
    pub fn new(
        encoder: E,
        button: B,
        sensor: S,
        processor: P,
        display: D,
        config: ControllerConfig,
    ) -> Self {
        Self {
            encoder,
            button,
            sensor,
            processor,
            renderer: Renderer::new(display),
            state: State::new(config.temp_sample_cadence),
            faults: FaultCounters::default(),
        }
    }

    /// Bring up the chip and the panel
    ///
    /// Sends the chip initialisation, draws the static layout and takes
    /// the encoder baseline from the current counter. The power-on volume
    /// byte is queued so the first step brings the chip in line with the
    /// model.
    pub fn start(&mut self) {
        if self.processor.initialize().is_err() {
            self.faults.record_bus_write();
            #[cfg(feature = "defmt")]
            defmt::warn!("tone processor initialisation failed");
        }
        // The init sequence leaves the volume register at 0x16, not the
        // model's default.
        self.state.params.mark_pending(ParameterKind::Volume);

        let State {
            params, selection, ..
        } = &mut self.state;
        if self.renderer.draw_layout(params, *selection).is_err() {
            self.faults.record_display();
        }

        self.state.sampler = InputSampler::new(self.encoder.ticks());

        #[cfg(feature = "defmt")]
        defmt::info!("controller started, faults: {}", self.faults);
    }

    /// Run one iteration of the main cycle
    pub fn step(&mut self) -> CycleReport {
        let mut report = CycleReport::default();

        // Encoder
        let ticks = self.encoder.ticks();
        if let Some(Intent::Adjust(direction)) = self.state.sampler.sample_encoder(ticks) {
            let kind = self.state.selection.current();
            self.state.params.apply_delta(kind, direction);
            report.encoder_updated = true;
        }

        // Temperature
        if self.state.thermal.tick() {
            match self.sensor.read_celsius() {
                Ok(celsius) => {
                    let _average = self.state.thermal.push(celsius);
                    report.temperature_updated = true;
                    #[cfg(feature = "defmt")]
                    defmt::trace!("temperature {} avg {}", celsius, _average);
                }
                Err(_err) => {
                    self.faults.record_sensor();
                    #[cfg(feature = "defmt")]
                    defmt::warn!("temperature read failed: {}", _err);
                }
            }
        }

        // Button
        let pressed = self.button.is_pressed();
        if self.state.sampler.sample_button(pressed) == Some(Intent::CycleSelection) {
            let _selected = self.state.selection.cycle();
            report.selection_updated = true;
            #[cfg(feature = "defmt")]
            defmt::debug!("selected {}", _selected);
        }

        // One register write per step
        if let Some((kind, byte)) = self.state.params.take_pending_write() {
            if self.processor.write_register(byte).is_err() {
                self.faults.record_bus_write();
                #[cfg(feature = "defmt")]
                defmt::warn!("{} register write {=u8:#04x} failed", kind, byte);
            }
            report.device_write = Some((kind, byte));
        }

        self.render(&report);
        report
    }

    fn render(&mut self, report: &CycleReport) {
        let State {
            params,
            selection,
            thermal,
            ..
        } = &mut self.state;

        if report.temperature_updated
            && self.renderer.render_temperature(thermal.average()).is_err()
        {
            self.faults.record_display();
        }
        if report.encoder_updated
            && self.renderer.render_encoder_change(params, *selection).is_err()
        {
            self.faults.record_display();
        }
        if report.selection_updated
            && self.renderer.render_selection_change(params, *selection).is_err()
        {
            self.faults.record_display();
        }
    }

    /// Current model state
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Failures counted so far
    pub fn faults(&self) -> FaultCounters {
        self.faults
    }

    /// The tone processor
    pub fn processor(&self) -> &P {
        &self.processor
    }

    /// The display
    pub fn display(&self) -> &D {
        self.renderer.display()
    }

    /// Take the hardware back
    pub fn release(self) -> (E, B, S, P, D) {
        (
            self.encoder,
            self.button,
            self.sensor,
            self.processor,
            self.renderer.release(),
        )
    }
}
