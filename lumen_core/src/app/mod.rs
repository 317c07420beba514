//! Utilities for engine initialization and the frame loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use lumen_ecs::Coordinator;

use crate::{
    config::Config,
    error::{AppError, Result},
    graphics::{Camera, Frame, MeshRegistry},
    scene::{Renderable, RigidBody, Transform},
    systems::{CameraSystem, PhysicsSystem, RenderSystem},
};

/// Type which represents duration between two frames.
pub type DeltaTime = Duration;

/// General event of game engine.
#[derive(Debug)]
pub enum Event<'a> {
    /// Called once before the first frame.
    Created,

    /// Called each frame after physics was updated.
    Update(DeltaTime),

    /// Called each frame when the scene is ready to be drawn.
    Draw(Frame<'a>),

    /// Called once after the last frame.
    Destroyed,
}

/// What the application should do after the event was handled.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Exit,
}

/// General context of game engine.
///
/// Can be created using [`init`] function.
///
pub struct Application {
    config: Config,
    coordinator: Coordinator,
    meshes: MeshRegistry,
    physics: PhysicsSystem,
    render: RenderSystem,
    camera: CameraSystem,
}

impl Application {
    /// Creates application with all engine components and systems registered.
    ///
    /// Unlike [`init`], does not check that this is the only application in the process.
    ///
    pub fn new(config: Config) -> Result<Self> {
        let mut coordinator = Coordinator::new();
        coordinator.register_component::<Transform>()?;
        coordinator.register_component::<RigidBody>()?;
        coordinator.register_component::<Renderable>()?;
        coordinator.register_component::<Camera>()?;
        coordinator.register_system_with_components::<PhysicsSystem>()?;
        coordinator.register_system_with_components::<RenderSystem>()?;
        coordinator.register_system_with_components::<CameraSystem>()?;

        log::info!(
            "application `{}` v{} created",
            config.name(),
            config.version(),
        );
        Ok(Self {
            config,
            coordinator,
            meshes: MeshRegistry::new(),
            physics: PhysicsSystem,
            render: RenderSystem::new(),
            camera: CameraSystem,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn coordinator(&self) -> &Coordinator {
        &self.coordinator
    }

    pub fn coordinator_mut(&mut self) -> &mut Coordinator {
        &mut self.coordinator
    }

    pub fn meshes(&self) -> &MeshRegistry {
        &self.meshes
    }

    pub fn meshes_mut(&mut self) -> &mut MeshRegistry {
        &mut self.meshes
    }

    /// Runs frames until the frame limit of the configuration is reached
    /// or the callback returns [`ControlFlow::Exit`].
    ///
    /// Callback may change the scene through the coordinator between frames.
    /// Returns count of frames which were run.
    ///
    /// # Errors
    ///
    /// Returns an error if any engine system fails; the loop is stopped immediately.
    ///
    pub fn run<F>(&mut self, mut callback: F) -> Result<u64>
    where
        F: FnMut(Event<'_>, &mut Coordinator) -> ControlFlow,
    {
        let delta_time = self.config.frame_delta();
        let frame_limit = self.config.frame_limit();

        let mut frames = 0;
        let mut flow = callback(Event::Created, &mut self.coordinator);
        while flow == ControlFlow::Continue && frame_limit.map_or(true, |limit| frames < limit) {
            flow = self.frame(frames, delta_time, &mut callback).map_err(|error| {
                log::error!("frame {} failed: {}", frames, error);
                error
            })?;
            frames += 1;
        }
        callback(Event::Destroyed, &mut self.coordinator);

        log::info!("closing this application after {} frames", frames);
        Ok(frames)
    }

    fn frame<F>(&mut self, index: u64, delta_time: DeltaTime, callback: &mut F) -> Result<ControlFlow>
    where
        F: FnMut(Event<'_>, &mut Coordinator) -> ControlFlow,
    {
        self.physics.update(&mut self.coordinator, delta_time)?;
        if callback(Event::Update(delta_time), &mut self.coordinator) == ControlFlow::Exit {
            return Ok(ControlFlow::Exit);
        }

        self.render.update(&mut self.coordinator, &self.meshes)?;
        let frame = Frame {
            index,
            camera: self.camera.update(&self.coordinator)?,
            commands: self.render.commands(),
        };
        Ok(callback(Event::Draw(frame), &mut self.coordinator))
    }
}

/// Creates a unique [`Application`] instance.
/// If application instance was created earlier, function call will return an error.
///
/// # Errors
///
/// An error is returned if application instance have already been initialized.
///
pub fn init(config: Config) -> Result<Application> {
    static FLAG: AtomicBool = AtomicBool::new(false);
    const UNINITIALIZED: bool = false;
    const INITIALIZED: bool = true;

    let result = FLAG.compare_exchange(
        UNINITIALIZED,
        INITIALIZED,
        Ordering::SeqCst,
        Ordering::SeqCst,
    );
    if result.is_err() {
        return Err(AppError::Initialized);
    }
    Application::new(config)
}
