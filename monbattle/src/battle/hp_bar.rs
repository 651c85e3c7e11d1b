use crate::battle::Side;

/// Default width of an HP bar, in display units.
pub const DEFAULT_HP_BAR_WIDTH: u16 = 48;
/// Seconds per display unit while the bar falls.
pub const FALL_SECONDS_PER_UNIT: f32 = 0.02;
/// Seconds per display unit while the bar rises.
pub const RISE_SECONDS_PER_UNIT: f32 = 0.04;

/// An externally-owned HP bar animation.
///
/// The battle tells the driver the real HP as soon as it changes and waits until the driver
/// reports that the displayed value caught up.
pub trait HpBarDriver {
    /// Starts animating one side's bar toward the given HP.
    fn animate_to(&mut self, side: Side, hp: u16, max_hp: u16);
    /// Advances every bar by `dt` seconds.
    fn tick(&mut self, dt: f32);
    /// Is the side's bar still moving toward its target?
    fn is_animating(&self, side: Side) -> bool;
    /// Shows the given HP without animating, as when a new combatant is sent out.
    fn snap_to(&mut self, side: Side, hp: u16, max_hp: u16) {
        self.animate_to(side, hp, max_hp);
    }
}

/// An HP bar driver that reaches every target immediately.
#[derive(Debug, Default)]
pub struct InstantHpBar;

impl HpBarDriver for InstantHpBar {
    fn animate_to(&mut self, _: Side, _: u16, _: u16) {}

    fn tick(&mut self, _: f32) {}

    fn is_animating(&self, _: Side) -> bool {
        false
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct BarState {
    units: u16,
    target: u16,
    elapsed: f32,
}

impl BarState {
    fn tick(&mut self, dt: f32) {
        if self.units == self.target {
            self.elapsed = 0.0;
            return;
        }
        self.elapsed += dt;
        let per_unit = if self.target < self.units {
            FALL_SECONDS_PER_UNIT
        } else {
            RISE_SECONDS_PER_UNIT
        };
        while self.elapsed >= per_unit && self.units != self.target {
            self.elapsed -= per_unit;
            if self.target < self.units {
                self.units -= 1;
            } else {
                self.units += 1;
            }
        }
        if self.units == self.target {
            self.elapsed = 0.0;
        }
    }
}

/// A pixel-unit HP bar that moves one unit at a time.
#[derive(Debug)]
pub struct HpBarDisplay {
    width: u16,
    player: BarState,
    enemy: BarState,
}

impl HpBarDisplay {
    pub fn new(width: u16) -> Self {
        Self {
            width,
            player: BarState::default(),
            enemy: BarState::default(),
        }
    }

    /// Display units for the given HP. Never empty while any HP remains.
    pub fn units_for(&self, hp: u16, max_hp: u16) -> u16 {
        if max_hp == 0 || hp == 0 {
            return 0;
        }
        let units = (hp.min(max_hp) as u32 * self.width as u32 / max_hp as u32) as u16;
        units.max(1)
    }

    /// Units currently displayed for the side.
    pub fn units(&self, side: Side) -> u16 {
        self.bar(side).units
    }

    fn bar(&self, side: Side) -> &BarState {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    fn bar_mut(&mut self, side: Side) -> &mut BarState {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }
}

impl Default for HpBarDisplay {
    fn default() -> Self {
        Self::new(DEFAULT_HP_BAR_WIDTH)
    }
}

impl HpBarDriver for HpBarDisplay {
    fn animate_to(&mut self, side: Side, hp: u16, max_hp: u16) {
        let target = self.units_for(hp, max_hp);
        self.bar_mut(side).target = target;
    }

    fn tick(&mut self, dt: f32) {
        self.player.tick(dt);
        self.enemy.tick(dt);
    }

    fn is_animating(&self, side: Side) -> bool {
        let bar = self.bar(side);
        bar.units != bar.target
    }

    fn snap_to(&mut self, side: Side, hp: u16, max_hp: u16) {
        let units = self.units_for(hp, max_hp);
        let bar = self.bar_mut(side);
        bar.units = units;
        bar.target = units;
        bar.elapsed = 0.0;
    }
}
