//! Component trait and lifecycle bookkeeping
//!
//! Components are polymorphic behavior units attached to exactly one game
//! object. The scene drives their lifecycle hooks in a fixed order: created
//! once when the owner joins a live scene, started once before the first
//! update, enabled and disabled in matched pairs, destroyed once at teardown.
//! All structural access during a hook goes through
//! [`ComponentContext`](crate::scene::context::ComponentContext).

use std::any::Any;

use crate::foundation::math::{Mat4, Vec3};
use crate::render::draw_queue::DrawQueue;
use crate::scene::context::ComponentContext;
use crate::render::error::DrawError;

/// Object-safe downcasting support, implemented for every component type.
pub trait AsAny {
    /// The component as a shared [`Any`] reference
    fn as_any(&self) -> &dyn Any;

    /// The component as a mutable [`Any`] reference
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A unit of behavior attached to one game object.
///
/// Every hook has an empty default body, so a component implements only the
/// lifecycle moments it cares about. Hooks must not assume any particular
/// sibling ordering beyond insertion order.
///
/// The `'static` bound is what lets typed queries downcast through [`Any`];
/// components may not borrow from their surroundings.
pub trait Component: AsAny + 'static {
    /// Called once when the owner first becomes part of a live scene, or
    /// immediately on attach if the owner is already in one
    fn on_create(&mut self, _ctx: &mut ComponentContext) {}

    /// Called once before the first update, after the scene has started
    fn on_start(&mut self, _ctx: &mut ComponentContext) {}

    /// Called whenever the component transitions to enabled
    fn on_enable(&mut self, _ctx: &mut ComponentContext) {}

    /// Called whenever the component transitions from enabled to disabled
    fn on_disable(&mut self, _ctx: &mut ComponentContext) {}

    /// Called once per frame while the component is enabled
    fn on_update(&mut self, _ctx: &mut ComponentContext) {}

    /// Called exactly once when the component is destroyed, after the final
    /// disable and before removal from the owner
    fn on_destroy(&mut self, _ctx: &mut ComponentContext) {}

    /// The world-space draw capability, if this component renders geometry
    fn drawable(&self) -> Option<&dyn Drawable> {
        None
    }

    /// The screen-space draw capability, if this component renders overlay UI
    fn overlay_drawable(&self) -> Option<&dyn OverlayDrawable> {
        None
    }
}

/// Capability for components that record world-space draw output
pub trait Drawable {
    /// Record draw commands for this frame using the owner's world matrix.
    ///
    /// Failures are logged and the component skipped for the frame; they never
    /// abort the draw walk.
    fn record(&self, world: &Mat4, queue: &mut DrawQueue) -> Result<(), DrawError>;
}

/// Capability for components that record screen-space overlay output
pub trait OverlayDrawable {
    /// Record overlay commands anchored at the owner's world position
    fn record_overlay(&self, world_position: Vec3, queue: &mut DrawQueue) -> Result<(), DrawError>;
}

/// Activation state of a game object or component.
///
/// `Undefined` is the pre-start default. It is distinct from `Disabled` so
/// that the first transition to enabled can fire `on_enable` exactly once,
/// and so that start can tell "never yet decided" from "explicitly off".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    /// Not yet enabled or disabled; start will auto-enable
    #[default]
    Undefined,
    /// Actively updating and drawing
    Enabled,
    /// Explicitly switched off
    Disabled,
}

impl Activation {
    /// Whether this state receives updates and draws
    pub fn is_enabled(self) -> bool {
        self == Self::Enabled
    }

    /// Apply a requested enabled flag, returning the event to fire if the
    /// effective state changed.
    ///
    /// `Undefined` counts as currently-disabled when asked to disable, so
    /// nothing fires; the choice is still recorded as `Disabled` so that
    /// start's auto-enable does not override it. Enabling from `Undefined`
    /// fires.
    pub(crate) fn apply(&mut self, enabled: bool) -> Option<ActivationEvent> {
        match (*self, enabled) {
            (Self::Undefined | Self::Disabled, true) => {
                *self = Self::Enabled;
                Some(ActivationEvent::Enabled)
            }
            (Self::Enabled, false) => {
                *self = Self::Disabled;
                Some(ActivationEvent::Disabled)
            }
            (Self::Undefined, false) => {
                *self = Self::Disabled;
                None
            }
            (Self::Enabled, true) | (Self::Disabled, false) => None,
        }
    }
}

/// Effective state change produced by [`Activation::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ActivationEvent {
    /// The target became enabled; fire `on_enable`
    Enabled,
    /// The target became disabled; fire `on_disable`
    Disabled,
}

/// Stand-in left in a slot while its component is lifted out for a hook call
struct Tombstone;

impl Component for Tombstone {}

/// One attached component plus the lifecycle state the scene tracks for it
pub struct ComponentSlot {
    component: Box<dyn Component>,
    /// Enabled state, see [`Activation`]
    pub(crate) activation: Activation,
    /// Whether `on_create` has fired
    pub(crate) created: bool,
    /// Whether `on_start` has fired
    pub(crate) started: bool,
    /// Whether teardown hooks (`on_disable`/`on_destroy`) have already fired.
    ///
    /// Distinguishes destroy-staged slots from bare removal staging, which
    /// fires no hooks and must still be torn down if the owner is destroyed.
    pub(crate) destroyed: bool,
    type_name: &'static str,
}

impl ComponentSlot {
    /// Wrap a concrete component for attachment
    pub(crate) fn new<C: Component>(component: C) -> Self {
        Self {
            component: Box::new(component),
            activation: Activation::Undefined,
            created: false,
            started: false,
            destroyed: false,
            type_name: std::any::type_name::<C>(),
        }
    }

    /// Short type name for log messages
    pub(crate) fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether the component currently receives updates
    pub fn is_enabled(&self) -> bool {
        self.activation.is_enabled()
    }

    /// Shared access to the boxed component
    pub(crate) fn component(&self) -> &dyn Component {
        self.component.as_ref()
    }

    /// Mutable access to the boxed component
    pub(crate) fn component_mut(&mut self) -> &mut dyn Component {
        self.component.as_mut()
    }

    /// Lift the component out so a hook can run while the scene stays
    /// borrowable. The slot holds a zero-sized tombstone until
    /// [`ComponentSlot::restore`] puts the component back; sibling type
    /// queries that land on the tombstone simply miss.
    pub(crate) fn lift(&mut self) -> Box<dyn Component> {
        std::mem::replace(&mut self.component, Box::new(Tombstone))
    }

    /// Put a lifted component back after its hook returned
    pub(crate) fn restore(&mut self, component: Box<dyn Component>) {
        self.component = component;
    }
}

impl std::fmt::Debug for ComponentSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentSlot")
            .field("type_name", &self.type_name)
            .field("activation", &self.activation)
            .field("created", &self.created)
            .field("started", &self.started)
            .field("destroyed", &self.destroyed)
            .finish()
    }
}
