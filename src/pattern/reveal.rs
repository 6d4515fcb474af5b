use web_time::{Duration, Instant};

use super::{Figure, offset_angle};

/// what a single [`Scheduler::check`] did
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    /// interval not yet over, nothing changed
    AwaitingTick,
    /// exactly one pending edge became visible
    Revealing,
    /// queue was empty, the next generation was computed
    Generating,
}

/// drives a [`Figure`]: at most one action per interval.
#[derive(Clone, Debug)]
pub struct Scheduler {
    interval: Duration,
    last_action: Instant,
    /// generation of the newest vertices in the figure, the initial polygon is generation 1
    generation: u32,
}

impl Scheduler {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_action: now,
            generation: 1,
        }
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// call this once per frame.
    pub fn check(&mut self, figure: &mut Figure, now: Instant) -> Phase {
        if now.saturating_duration_since(self.last_action) <= self.interval {
            return Phase::AwaitingTick;
        }
        self.last_action = now;

        if figure.reveal_next().is_some() {
            return Phase::Revealing;
        }
        self.generation += 1;
        let offset = offset_angle(figure.nr_corners(), self.generation);
        let queued = figure.next_generation(offset);
        log::debug!(
            "generation {} queued {queued} edges (offset {offset} rad, {} vertices)",
            self.generation,
            figure.vertices().len(),
        );
        Phase::Generating
    }

    /// time left until [`Self::check`] acts again.
    pub fn until_next_tick(&self, now: Instant) -> Duration {
        (self.last_action + self.interval).saturating_duration_since(now)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_4;

    const INTERVAL: Duration = Duration::from_millis(50);
    const STEP: Duration = Duration::from_millis(51);

    #[test]
    fn nothing_happens_before_interval() {
        let start = Instant::now();
        let mut figure = Figure::initial(4, 600.0);
        let mut scheduler = Scheduler::new(INTERVAL, start);

        assert_eq!(scheduler.check(&mut figure, start), Phase::AwaitingTick);
        assert_eq!(scheduler.check(&mut figure, start + INTERVAL), Phase::AwaitingTick);
        assert_eq!(figure.vertices().len(), 4);
        assert_eq!(scheduler.generation(), 1);
        assert_eq!(scheduler.until_next_tick(start + Duration::from_millis(20)), Duration::from_millis(30));
        assert_eq!(scheduler.until_next_tick(start + STEP), Duration::ZERO);
    }

    #[test]
    fn square_scenario() {
        let start = Instant::now();
        let mut figure = Figure::initial(4, 600.0);
        let mut scheduler = Scheduler::new(INTERVAL, start);
        assert_eq!(figure.edges().len(), 6);
        assert!(figure.pending().is_empty());

        let mut now = start + STEP;
        assert_eq!(scheduler.check(&mut figure, now), Phase::Generating);
        assert_eq!(scheduler.generation(), 2);
        assert_eq!(figure.vertices().len(), 8);
        assert_eq!(figure.pending().len(), 20);

        //the new copy is rotated by pi / 4
        let first_new = figure.vertices()[4];
        assert_relative_eq!(first_new.y.atan2(first_new.x), FRAC_PI_4, epsilon = 1e-5);

        for left in (0..20).rev() {
            now += STEP;
            assert_eq!(scheduler.check(&mut figure, now), Phase::Revealing);
            assert_eq!(figure.pending().len(), left);
            //a second check in the same frame does nothing
            assert_eq!(scheduler.check(&mut figure, now), Phase::AwaitingTick);
        }
        assert_eq!(figure.edges().len(), 26);

        now += STEP;
        assert_eq!(scheduler.check(&mut figure, now), Phase::Generating);
        assert_eq!(scheduler.generation(), 3);
        assert_eq!(figure.vertices().len(), 16);
        assert_eq!(figure.pending().len(), 26 + 8 * 8);
    }

    #[test]
    fn timer_resets_after_action() {
        let start = Instant::now();
        let mut figure = Figure::initial(4, 1.0);
        figure.next_generation(0.1);
        let mut scheduler = Scheduler::new(INTERVAL, start);

        let first = start + STEP;
        assert_eq!(scheduler.check(&mut figure, first), Phase::Revealing);
        //measured from the last action, not from the start
        assert_eq!(scheduler.check(&mut figure, start + 2 * INTERVAL), Phase::AwaitingTick);
        assert_eq!(scheduler.check(&mut figure, first + STEP), Phase::Revealing);
    }

    #[test]
    fn long_pause_reveals_only_one() {
        let start = Instant::now();
        let mut figure = Figure::initial(4, 1.0);
        figure.next_generation(0.1);
        let mut scheduler = Scheduler::new(INTERVAL, start);

        let pending = figure.pending().len();
        let later = start + Duration::from_secs(10);
        assert_eq!(scheduler.check(&mut figure, later), Phase::Revealing);
        assert_eq!(figure.pending().len(), pending - 1);
    }
}
