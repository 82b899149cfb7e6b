//! Component-local toggles. None of these touch the view or the theme.

/// Mobile sidebar drawer on the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawerState {
    pub open: bool,
}

impl DrawerState {
    /// Flips the drawer and returns whether it is now open.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Notification switches on the admin preferences card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationPreferences {
    pub email: bool,
    pub push: bool,
    pub auto_backup: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email: true,
            push: false,
            auto_backup: true,
        }
    }
}

/// Identifies one switch in [`NotificationPreferences`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preference {
    Email,
    Push,
    AutoBackup,
}

impl Preference {
    pub fn label(self) -> &'static str {
        match self {
            Preference::Email => "Email Notifications",
            Preference::Push => "Push Notifications",
            Preference::AutoBackup => "Auto Backup",
        }
    }

    pub fn all() -> &'static [Preference] {
        &[Preference::Email, Preference::Push, Preference::AutoBackup]
    }
}

impl NotificationPreferences {
    pub fn get(&self, preference: Preference) -> bool {
        match preference {
            Preference::Email => self.email,
            Preference::Push => self.push,
            Preference::AutoBackup => self.auto_backup,
        }
    }

    pub fn set(&mut self, preference: Preference, enabled: bool) {
        let slot = match preference {
            Preference::Email => &mut self.email,
            Preference::Push => &mut self.push,
            Preference::AutoBackup => &mut self.auto_backup,
        };
        *slot = enabled;
        tracing::debug!(?preference, enabled, "Preference changed");
    }
}
