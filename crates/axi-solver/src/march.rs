//! March controller: conical bootstrap, axial march, run reporting.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use axi_core::FreeStream;
use axi_geom::Geometry;

use crate::config::SolverConfig;
use crate::error::SolverResult;
use crate::grid::FlowGrid;
use crate::primitives::BranchSelector;
use crate::snapshot::{Snapshot, SnapshotTag};
use crate::station::StationFrame;
use crate::sweep::mac_cormack_sweep;

/// Growth applied to the axial step (and decay to the smoothing
/// coefficient) after every marching step.
const STEP_GROWTH: f64 = 1.005;
/// Starting value of the artificial-smoothing coefficient.
const BETA_INITIAL: f64 = -20.0;
/// Conical-phase convergence threshold on the sweep residual.
const CONVERGENCE_TOL: f64 = 1.0e-4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Conical,
    Marching,
    Done,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The march reached the end of the body.
    Completed,
    /// The conical bootstrap hit its iteration cap without settling.
    NotConverged,
}

/// Summary of a finished run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub outcome: RunOutcome,
    pub conical_iterations: usize,
    pub marching_steps: usize,
    /// Downstream bracket station when the run stopped.
    pub final_x: f64,
    /// Residual of the last sweep.
    pub final_residual: f64,
    pub elapsed: Duration,
}

impl RunReport {
    pub fn converged(&self) -> bool {
        self.outcome == RunOutcome::Completed
    }
}

/// The marching solver: grid, bracket geometry, and phase state.
///
/// Snapshots go to a caller-supplied sink as the run progresses; the
/// solver itself writes nothing.
#[derive(Debug)]
pub struct PnsSolver<B, S> {
    cfg: SolverConfig,
    free: FreeStream,
    body: B,
    shock: S,
    grid: FlowGrid,
    frame: StationFrame,
    branch: BranchSelector,
    phase: Phase,
    dx: f64,
    beta: f64,
}

impl<B: Geometry, S: Geometry> PnsSolver<B, S> {
    /// Validate the controls and set up the initial field and bracket.
    pub fn new(cfg: SolverConfig, free: FreeStream, body: B, shock: S) -> SolverResult<Self> {
        cfg.validate()?;
        let grid = FlowGrid::new(cfg.neta, &free);
        let dx = cfg.dx_initial;
        let frame = StationFrame::sample(cfg.x_start - dx, cfg.x_start, &body, &shock, free.mu_inf);
        Ok(Self {
            cfg,
            free,
            body,
            shock,
            grid,
            frame,
            branch: BranchSelector::default(),
            phase: Phase::Conical,
            dx,
            beta: BETA_INITIAL,
        })
    }

    /// Run to completion, pushing snapshots into `emit`.
    ///
    /// Non-convergence of the conical phase is a normal outcome carried
    /// in the report, not an error.
    pub fn run<F>(&mut self, mut emit: F) -> RunReport
    where
        F: FnMut(&Snapshot),
    {
        let start = Instant::now();
        let mut conical_iterations = 0_usize;
        let mut marching_steps = 0_usize;
        let mut residual = 0.0_f64;
        let mut outcome = RunOutcome::NotConverged;
        let mut last_emit_x = self.cfg.x_start;

        info!(
            mach = self.free.mach,
            neta = self.cfg.neta,
            x_start = self.cfg.x_start,
            "starting conical phase"
        );
        emit(&self.capture(SnapshotTag::Conical { iteration: 0, residual: 0.0 }));

        while self.phase != Phase::Done {
            self.advance();
            residual = mac_cormack_sweep(
                &mut self.grid,
                &self.frame,
                &mut self.branch,
                &self.free,
                self.dx,
                self.beta,
            );

            match self.phase {
                Phase::Conical => {
                    conical_iterations += 1;
                    debug!(iteration = conical_iterations, residual, "conical sweep");
                    if residual <= CONVERGENCE_TOL {
                        info!(
                            iteration = conical_iterations,
                            residual, "conical solution converged"
                        );
                        emit(&self.capture(SnapshotTag::Conical {
                            iteration: conical_iterations,
                            residual,
                        }));
                        self.phase = Phase::Marching;
                    } else if conical_iterations >= self.cfg.max_conical_iters {
                        warn!(
                            iterations = conical_iterations,
                            residual, "conical phase stopped at the iteration cap"
                        );
                        outcome = RunOutcome::NotConverged;
                        self.phase = Phase::Done;
                    } else if conical_iterations % self.cfg.conical_report_every == 0 {
                        emit(&self.capture(SnapshotTag::Conical {
                            iteration: conical_iterations,
                            residual,
                        }));
                    }
                }
                Phase::Marching => {
                    marching_steps += 1;
                    let x = self.frame.x2;
                    if x > 1.0 - self.dx {
                        emit(&self.capture(SnapshotTag::Marching { x }));
                        info!(x, steps = marching_steps, "march reached the end of the body");
                        outcome = RunOutcome::Completed;
                        self.phase = Phase::Done;
                    } else if x - last_emit_x > self.cfg.march_report_spacing {
                        emit(&self.capture(SnapshotTag::Marching { x }));
                        last_emit_x = x;
                    }
                }
                Phase::Done => {}
            }
        }

        let elapsed = start.elapsed();
        info!(
            ?outcome,
            conical_iterations,
            marching_steps,
            elapsed_ms = elapsed.as_millis() as u64,
            "run finished"
        );
        RunReport {
            outcome,
            conical_iterations,
            marching_steps,
            final_x: self.frame.x2,
            final_residual: residual,
            elapsed,
        }
    }

    /// Move the bracket for the next sweep. The conical phase holds it
    /// pinned at the anchor; the march slides it downstream, growing the
    /// step and relaxing the smoothing afterwards.
    fn advance(&mut self) {
        match self.phase {
            Phase::Conical => {
                self.frame = StationFrame::sample(
                    self.cfg.x_start - self.dx,
                    self.cfg.x_start,
                    &self.body,
                    &self.shock,
                    self.free.mu_inf,
                );
            }
            Phase::Marching => {
                let x1 = self.frame.x2;
                self.frame = StationFrame::sample(
                    x1,
                    x1 + self.dx,
                    &self.body,
                    &self.shock,
                    self.free.mu_inf,
                );
                self.dx *= STEP_GROWTH;
                self.beta /= STEP_GROWTH;
            }
            Phase::Done => {}
        }
    }

    fn capture(&self, tag: SnapshotTag) -> Snapshot {
        Snapshot::capture(tag, &self.grid, &self.free)
    }
}
