use crate::capability::CapabilityLevel;
use crate::config::ShimConfig;
use crate::error::Result;
use crate::window::{CutoutPolicy, HostWindow, InsetsTypes, SystemUiFlags, WindowCommand};
use crate::ActivityCallbacks;

/// Visibility of the system status and navigation bars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImmersiveState {
    /// The OS default when an activity starts
    #[default]
    Visible,
    Hidden,
}

/// Owns the display and system bar configuration of one foreground activity
///
/// Each lifecycle signal is first turned into a plan, a list of
/// [`WindowCommand`]s that only depends on the [`CapabilityLevel`], the
/// [`ShimConfig`] and the signal itself, and the plan is then replayed onto
/// a [`HostWindow`].
#[derive(Debug, Clone)]
pub struct DisplayUiController {
    level: CapabilityLevel,
    config: ShimConfig,
    state: ImmersiveState,
}

impl DisplayUiController {
    /// Creates a controller for an explicitly chosen capability level
    ///
    /// # Errors
    ///
    /// Returns [`ShimError::InvalidConfig`] if `config` doesn't pass
    /// [`ShimConfig::validate()`].
    ///
    /// [`ShimError::InvalidConfig`]: crate::ShimError::InvalidConfig
    pub fn new(level: CapabilityLevel, config: ShimConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_valid_config(level, config))
    }

    fn with_valid_config(level: CapabilityLevel, config: ShimConfig) -> Self {
        Self {
            level,
            config,
            state: ImmersiveState::default(),
        }
    }

    /// Creates a controller for the running OS
    ///
    /// If the SDK version can't be determined this degrades to
    /// [`CapabilityLevel::Legacy`], whose calls are still honored by newer
    /// OS versions. An invalid `config` is replaced by
    /// [`ShimConfig::default()`].
    pub fn from_system(config: ShimConfig) -> Self {
        let level = match CapabilityLevel::detect() {
            Ok(level) => level,
            Err(err) => {
                log::warn!("{err}, assuming legacy window APIs");
                CapabilityLevel::Legacy
            }
        };
        log::debug!("Capability level: {level:?}");
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                log::warn!("{err}, using the default configuration");
                ShimConfig::default()
            }
        };
        Self::with_valid_config(level, config)
    }

    pub fn level(&self) -> CapabilityLevel {
        self.level
    }

    pub fn config(&self) -> &ShimConfig {
        &self.config
    }

    pub fn state(&self) -> ImmersiveState {
        self.state
    }

    /// Returns the commands that configure a newly created window
    pub fn plan_activity_create(&self) -> Vec<WindowCommand> {
        let mut plan = Vec::new();

        if self.level.supports_cutout_modes() {
            let policy = self.config.cutout_policy();
            if policy != CutoutPolicy::Ignore {
                plan.push(WindowCommand::SetCutoutMode(policy));
            }
        } else {
            log::debug!("Display cutout mode not supported (requires Android P+)");
        }

        if self.level.supports_insets_controller() {
            if let Some(hz) = self.config.preferred_refresh_rate() {
                plan.push(WindowCommand::SetPreferredRefreshRate(hz));
            }
        }

        plan
    }

    /// Returns the commands for a focus change along with the state they
    /// lead to
    pub fn plan_window_focus_changed(
        &self,
        has_focus: bool,
    ) -> (Vec<WindowCommand>, ImmersiveState) {
        if has_focus {
            let plan = if self.level.supports_insets_controller() {
                vec![
                    WindowCommand::SetDecorFitsSystemWindows(false),
                    WindowCommand::HideSystemBars(InsetsTypes::system_bars()),
                    WindowCommand::SetSystemBarsBehavior(self.config.bars_behavior()),
                ]
            } else {
                vec![WindowCommand::SetSystemUiVisibility(
                    SystemUiFlags::immersive_sticky(),
                )]
            };
            (plan, ImmersiveState::Hidden)
        } else if self.config.restore_bars_on_focus_loss() && self.state == ImmersiveState::Hidden
        {
            let plan = if self.level.supports_insets_controller() {
                vec![WindowCommand::ShowSystemBars(InsetsTypes::system_bars())]
            } else {
                vec![WindowCommand::SetSystemUiVisibility(SystemUiFlags::empty())]
            };
            (plan, ImmersiveState::Visible)
        } else {
            (Vec::new(), self.state)
        }
    }

    pub fn on_activity_create<W: HostWindow + ?Sized>(&mut self, window: &mut W) -> Result<()> {
        for command in self.plan_activity_create() {
            log::debug!("{command:?}");
            command.apply(window)?;
        }
        Ok(())
    }

    /// The state only advances once every command of the plan succeeded
    pub fn on_window_focus_changed<W: HostWindow + ?Sized>(
        &mut self,
        window: &mut W,
        has_focus: bool,
    ) -> Result<()> {
        let (plan, next) = self.plan_window_focus_changed(has_focus);
        if has_focus {
            if self.level.supports_insets_controller() {
                log::debug!("Running on Android R or newer, using WindowInsetsController");
            } else {
                log::debug!("Running on older Android, using setSystemUiVisibility");
            }
        }
        for command in plan {
            log::debug!("{command:?}");
            command.apply(window)?;
        }
        self.state = next;
        Ok(())
    }
}

impl ActivityCallbacks for DisplayUiController {
    fn on_create(&mut self, window: &mut dyn HostWindow) -> Result<()> {
        self.on_activity_create(window)
    }

    fn on_window_focus_changed(
        &mut self,
        window: &mut dyn HostWindow,
        has_focus: bool,
    ) -> Result<()> {
        DisplayUiController::on_window_focus_changed(self, window, has_focus)
    }

    fn native_libraries(&self) -> &[String] {
        self.config.native_libraries()
    }

    fn log_tag(&self) -> &str {
        self.config.log_tag()
    }
}
