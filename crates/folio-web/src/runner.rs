use folio_engine::{
    Bounds, ConfigError, ElementId, Field, FixedTimestep, FolioConfig, FolioEvent,
    FrameBuffer, InputEvent, InputQueue, PointerState, RevealInstance, RevealState,
};
#[cfg(feature = "chat")]
use folio_engine::{KnowledgeBase, MatchResult};

/// Owns everything the page animates and wires it to the host's frame loop.
///
/// The page creates one runner through `folio_init` and drives it with free
/// functions exported via `#[wasm_bindgen]`, because wasm-bindgen cannot
/// hand a borrowed Rust struct across the boundary per frame.
pub struct FolioRunner {
    config: FolioConfig,
    field: Field,
    pointer: PointerState,
    input: InputQueue,
    timestep: FixedTimestep,
    frame: FrameBuffer,
    reveals: RevealState,
    reveal_buffer: Vec<RevealInstance>,
    /// Events raised during the last tick, for the page to poll.
    events: Vec<FolioEvent>,
    #[cfg(feature = "chat")]
    knowledge: KnowledgeBase,
}

impl FolioRunner {
    pub fn new(config: FolioConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let field = Field::from_config(&config.field)?;
        #[cfg(feature = "chat")]
        let knowledge = match &config.faq {
            Some(table) => KnowledgeBase::from_value(table.clone())?,
            None => KnowledgeBase::portfolio()?,
        };

        let mut frame = FrameBuffer::with_capacity(config.field.count);
        field.write_frame(&mut frame);

        Ok(Self {
            timestep: FixedTimestep::new(config.fixed_dt, config.max_steps_per_frame),
            reveals: RevealState::new(config.reveal),
            field,
            pointer: PointerState::ABSENT,
            input: InputQueue::new(),
            frame,
            reveal_buffer: Vec::new(),
            events: Vec::new(),
            #[cfg(feature = "chat")]
            knowledge,
            config,
        })
    }

    /// Parse a JSON config (empty string for defaults) and build a runner.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::new(FolioConfig::from_json(json)?)
    }

    /// Queue a host event; applied at the start of the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Start reveals for elements that entered the viewport together.
    pub fn observe(&mut self, ids: &[u32]) {
        let batch: Vec<ElementId> = ids.iter().copied().map(ElementId).collect();
        let started = self.reveals.observe(&batch);
        log::debug!("reveal: {started} of {} elements started", ids.len());
    }

    /// Run one host frame: apply input, step the field a whole number of
    /// fixed ticks, advance reveals, and rebuild the frame buffers.
    pub fn tick(&mut self, frame_dt: f32) {
        self.events.clear();

        for event in self.input.drain() {
            self.apply(event);
        }

        let steps = self.timestep.accumulate(frame_dt);
        for _ in 0..steps {
            self.field.step(&self.pointer);
        }

        self.reveals.tick(steps as f32 * self.timestep.dt());
        self.events
            .extend(self.reveals.drain_completed().map(|id| FolioEvent::reveal_done(id.0)));

        self.field.write_frame(&mut self.frame);
        self.reveals.write_instances(&mut self.reveal_buffer);
    }

    fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMove { x, y } => {
                self.pointer = if x.is_finite() && y.is_finite() {
                    PointerState::at(x, y)
                } else {
                    PointerState::ABSENT
                };
            }
            InputEvent::PointerLeave => self.pointer = PointerState::ABSENT,
            InputEvent::Resize { width, height } => {
                if let Err(e) = self.field.resize(Bounds::new(width, height)) {
                    log::warn!("resize ignored: {e}");
                    return;
                }
                if self.config.field.reseed_on_resize {
                    self.field.reseed();
                }
            }
        }
    }

    /// Answer a chat question.
    #[cfg(feature = "chat")]
    pub fn ask(&self, query: &str) -> MatchResult<'_> {
        self.knowledge.match_query(query)
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn events(&self) -> &[FolioEvent] {
        &self.events
    }

    // ---- Pointer accessors for direct reads from WASM memory ----

    pub fn particles_ptr(&self) -> *const f32 {
        self.frame.particles_ptr()
    }

    pub fn particle_count(&self) -> u32 {
        self.frame.particle_count()
    }

    pub fn links_ptr(&self) -> *const f32 {
        self.frame.links_ptr()
    }

    pub fn link_count(&self) -> u32 {
        self.frame.link_count()
    }

    pub fn reveal_ptr(&self) -> *const f32 {
        self.reveal_buffer.as_ptr() as *const f32
    }

    pub fn reveal_count(&self) -> u32 {
        self.reveal_buffer.len() as u32
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.events.as_ptr() as *const f32
    }

    pub fn events_len(&self) -> u32 {
        self.events.len() as u32
    }

    pub fn world_width(&self) -> f32 {
        self.field.bounds().width
    }

    pub fn world_height(&self) -> f32 {
        self.field.bounds().height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn runner(json: &str) -> FolioRunner {
        FolioRunner::from_json(json).unwrap()
    }

    #[test]
    fn builds_with_defaults() {
        let r = runner("");
        assert_eq!(r.particle_count(), 100);
        assert_eq!(r.world_width(), 800.0);
        assert!(!r.pointer().is_present());
    }

    #[test]
    fn invalid_config_is_rejected() {
        assert!(FolioRunner::from_json(r#"{ "field": { "count": 0 } }"#).is_err());
        assert!(FolioRunner::from_json("not json").is_err());
    }

    #[test]
    fn oversized_count_is_rejected_before_allocating() {
        let r = FolioRunner::from_json(r#"{ "field": { "count": 18446744073709551615 } }"#);
        assert!(matches!(r, Err(ConfigError::InvalidCount(_))));
    }

    #[test]
    fn pointer_events_apply_on_tick() {
        let mut r = runner("");
        r.push_input(InputEvent::PointerMove { x: 10.0, y: 20.0 });
        assert!(!r.pointer().is_present());
        r.tick(FRAME);
        assert_eq!(r.pointer(), PointerState::at(10.0, 20.0));

        r.push_input(InputEvent::PointerLeave);
        r.tick(FRAME);
        assert!(!r.pointer().is_present());
    }

    #[test]
    fn pointer_disturbs_then_field_settles() {
        let mut r = runner(r#"{ "field": { "count": 60, "seed": 4 } }"#);
        r.push_input(InputEvent::PointerMove { x: 400.0, y: 300.0 });
        for _ in 0..30 {
            r.tick(FRAME);
        }
        assert!(r.field().mean_displacement() > 0.0);

        r.push_input(InputEvent::PointerLeave);
        for _ in 0..3000 {
            r.tick(FRAME);
        }
        assert!(r.field().is_settled());
    }

    #[test]
    fn frame_buffers_track_field() {
        let mut r = runner("");
        r.tick(FRAME);
        assert_eq!(r.particle_count() as usize, r.field().len());
        assert_eq!(r.link_count() as usize, r.field().links().len());
        let first = r.field().particles()[0].position;
        assert_eq!(r.frame().particles[0].x, first.x);
    }

    #[test]
    fn resize_keeps_homes_unless_configured() {
        let mut r = runner("");
        let before = r.field().particles()[0].home;
        r.push_input(InputEvent::Resize { width: 300.0, height: 200.0 });
        r.tick(FRAME);
        assert_eq!(r.world_width(), 300.0);
        assert_eq!(r.field().particles()[0].home, before);

        let mut r = runner(r#"{ "field": { "reseed_on_resize": true } }"#);
        r.push_input(InputEvent::Resize { width: 300.0, height: 200.0 });
        r.tick(FRAME);
        for p in r.field().particles() {
            assert!(p.home.x < 300.0 && p.home.y < 200.0);
        }
    }

    #[test]
    fn bad_resize_is_ignored() {
        let mut r = runner("");
        r.push_input(InputEvent::Resize { width: 0.0, height: 200.0 });
        r.tick(FRAME);
        assert_eq!(r.world_width(), 800.0);
    }

    #[test]
    fn reveal_completion_raises_event() {
        let mut r = runner("");
        r.observe(&[3]);
        r.tick(FRAME);
        assert_eq!(r.reveal_count(), 1);

        let mut done = Vec::new();
        for _ in 0..60 {
            r.tick(FRAME);
            done.extend_from_slice(r.events());
        }
        assert_eq!(done, vec![FolioEvent::reveal_done(3)]);
        assert_eq!(r.reveal_count(), 0);
    }

    #[cfg(feature = "chat")]
    #[test]
    fn ask_uses_portfolio_table() {
        let r = runner("");
        let cv = r.ask("What is your CV?");
        assert!(!cv.is_fallback());
        assert!(cv.response.contains("CV section"));
        assert!(r.ask("quantum gardening").is_fallback());
    }

    #[cfg(feature = "chat")]
    #[test]
    fn faq_override_replaces_table() {
        let json = r#"{ "faq": [ { "triggers": ["pricing"], "response": "Ask by email." } ] }"#;
        let r = runner(json);
        assert_eq!(r.ask("pricing").response, "Ask by email.");
        assert!(r.ask("What is your CV?").is_fallback());
    }
}
