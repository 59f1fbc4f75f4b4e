//! Counter Unit - a second example unit for strand
//!
//! Exports a module and event type under different names than the hello
//! unit but with the same `u32 -> String` exchange shape, which makes it a
//! drop-in replacement for a rebuilt unit whose type names changed.

use strand_module_api::{
    EventShape, Exchange, Module, ModuleContext, ModuleError, ModuleEvent, TypedEvent, export_unit,
};

/// Counts the events it claims and reports the running total.
#[derive(Default)]
pub struct CounterModule {
    count: u64,
}

impl Module for CounterModule {
    fn can_handle(&self, event: &ModuleEvent) -> bool {
        event.input::<u32>().is_some()
    }

    fn handle(
        &mut self,
        event: &mut ModuleEvent,
        _ctx: &mut ModuleContext,
    ) -> Result<(), ModuleError> {
        self.count += 1;
        event.set_output(format!("count {}", self.count));
        event.mark_handled();
        Ok(())
    }
}

/// The tick exchange: a `u32` in, a report message out.
#[derive(Default)]
pub struct TickEvent(TypedEvent<u32, String>);

impl Exchange for TickEvent {
    fn shape(&self) -> EventShape {
        self.0.shape()
    }

    fn event(&self) -> &ModuleEvent {
        self.0.event()
    }

    fn event_mut(&mut self) -> &mut ModuleEvent {
        self.0.event_mut()
    }
}

export_unit! {
    modules: [CounterModule: "Counts claimed events"],
    events: [TickEvent],
}
