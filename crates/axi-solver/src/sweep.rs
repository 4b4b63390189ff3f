//! One MacCormack predictor-corrector pass across the radial grid.
//!
//! The predictor advances each interior station with forward eta
//! differences about the upstream bracket face; the corrector re-does the
//! station one behind it with backward differences about the downstream
//! face and averages the two, so by the time station `i` is predicted,
//! station `i - 1` can be finished. Freshly predicted states live in a
//! three-slot rolling window until their corrector consumes them.

use nalgebra::Vector3;

use axi_core::{FreeStream, GAMMA};

use crate::grid::FlowGrid;
use crate::primitives::{BranchSelector, Primitives};
use crate::station::StationFrame;
use crate::window::WorkWindow;

/// Sweep the grid once and return the largest pressure change seen by the
/// corrector. The outer station is pinned at free stream instead of being
/// integrated, and the wall is closed afterwards from the station-2
/// pressure and the energy relation.
pub(crate) fn mac_cormack_sweep(
    grid: &mut FlowGrid,
    frame: &StationFrame,
    branch: &mut BranchSelector,
    free: &FreeStream,
    dx: f64,
    beta: f64,
) -> f64 {
    let neta = grid.neta();
    let den1 = 1.0 / grid.deta();
    let h_inf = free.total_enthalpy;
    // Upstream viscosity scale feeds both passes.
    let mu = frame.mu1;
    let two_thirds = 2.0 / 3.0;

    let etar1 = 1.0 / (frame.shock_r1 - frame.body_r1);
    let etar2 = 1.0 / (frame.shock_r2 - frame.body_r2);
    let etax1 = |eta: f64| ((eta - 1.0) * frame.body_slope1 - eta * frame.shock_slope1) * etar1;
    let etax2 = |eta: f64| ((eta - 1.0) * frame.body_slope2 - eta * frame.shock_slope2) * etar2;

    let mut w = WorkWindow::default();

    // Predictor minus-side quantities roll forward from the previous
    // station's plus side; the first interior station seeds them from
    // one-sided differences into the wall.
    let mut etax_m = 0.0;
    let mut deldv_m = 0.0;
    let mut e_p = Vector3::zeros();
    let mut f_p = Vector3::zeros();
    // Corrector rolling fluxes, seeded from the wall slot of the window.
    let mut ec_p = Vector3::zeros();
    let mut fc_p = Vector3::zeros();

    let mut residual = 0.0_f64;

    for i in 2..=neta {
        if i == neta {
            // Shock boundary: overwrite with free stream, nothing to solve.
            w.shift();
            w.front = Primitives { rho: 1.0, u: 1.0, v: 0.0, p: free.pressure };
        } else {
            // Predictor for station i.
            let eta_i = grid.eta[i];
            let eta_ip = grid.eta[i + 1];
            let r1 = frame.body_r1 + eta_i * (frame.shock_r1 - frame.body_r1);
            let r1p = frame.body_r1 + eta_ip * (frame.shock_r1 - frame.body_r1);

            let e1 = grid.rho[i] * grid.u[i] * r1;
            let mut ep = Vector3::new(e1, e1 * grid.u[i] + grid.p[i] * r1, e1 * grid.v[i]);

            if i == 2 {
                etax_m = etax1(eta_i);
                let ueta = (grid.u[2] - grid.u[1]) * den1;
                let veta = (grid.v[2] - grid.v[1]) * den1;
                deldv_m = etax_m * ueta + etar1 * veta + grid.v[2] / r1;
                let txx = 2.0 * mu * etax_m * ueta - two_thirds * mu * beta * deldv_m;
                let sigxr = mu * (etax_m * veta + etar1 * ueta);
                let trr = 2.0 * mu * etar1 * veta - two_thirds * mu * beta * deldv_m;
                let ew = grid.rho[2] * grid.u[2] * r1;
                e_p = Vector3::new(
                    ew,
                    ew * grid.u[2] + grid.p[2] * r1 - txx * r1,
                    ew * grid.v[2] - sigxr * r1,
                );
                let fw = grid.rho[2] * grid.v[2] * r1;
                f_p = Vector3::new(
                    fw,
                    fw * grid.u[2] - sigxr * r1,
                    fw * grid.v[2] + grid.p[2] * r1 - trr * r1,
                );
            }

            let etax_p = etax1(eta_ip);
            let ueta = (grid.u[i + 1] - grid.u[i]) * den1;
            let veta = (grid.v[i + 1] - grid.v[i]) * den1;
            let deldv_p = etax_p * ueta + etar1 * veta + grid.v[i + 1] * r1p;
            let txx = 2.0 * mu * etax_p * ueta - two_thirds * mu * beta * deldv_p;
            let sigxr = mu * (etax_p * veta + etar1 * ueta);
            let trr = 2.0 * mu * etar1 * veta - two_thirds * mu * beta * deldv_p;

            let e_m = e_p;
            let f_m = f_p;
            let en = grid.rho[i + 1] * grid.u[i + 1] * r1p;
            e_p = Vector3::new(
                en,
                en * grid.u[i + 1] + grid.p[i + 1] * r1p - txx * r1p,
                en * grid.v[i + 1] - sigxr * r1p,
            );
            let fn_ = grid.rho[i + 1] * grid.v[i + 1] * r1p;
            f_p = Vector3::new(
                fn_,
                fn_ * grid.u[i + 1] - sigxr * r1p,
                fn_ * grid.v[i + 1] + grid.p[i + 1] * r1p - trr * r1p,
            );

            let sig = -grid.p[i] + 2.0 * mu * grid.v[i] / r1 - two_thirds * mu * beta * deldv_m;
            let h = Vector3::new(0.0, 0.0, -sig);

            ep -= dx * etax_m * den1 * (e_p - e_m) + dx * etar1 * den1 * (f_p - f_m) - dx * h;

            let r2 = frame.body_r2 + eta_i * (frame.shock_r2 - frame.body_r2);
            let cons = ep / r2;
            let (pred, _) = branch.invert(i, cons.x, cons.y, cons.z, h_inf);
            w.shift();
            w.front = pred;

            etax_m = etax_p;
            deldv_m = deldv_p;
        }

        if i == 2 {
            // The window's mid slot is the wall: no slip, pressure from the
            // fresh prediction, density from the energy relation.
            let pw = w.front.p;
            w.mid = Primitives { rho: GAMMA * pw / ((GAMMA - 1.0) * h_inf), u: 0.0, v: 0.0, p: pw };
        } else {
            // Corrector for station i - 1.
            let eta_c = grid.eta[i - 1];
            let eta_cm = grid.eta[i - 2];
            let r1 = frame.body_r1 + eta_c * (frame.shock_r1 - frame.body_r1);
            let r2 = frame.body_r2 + eta_c * (frame.shock_r2 - frame.body_r2);
            let r2m = frame.body_r2 + eta_cm * (frame.shock_r2 - frame.body_r2);

            let xe = grid.rho[i - 1] * grid.u[i - 1] * r1;
            let xep =
                Vector3::new(xe, xe * grid.u[i - 1] + grid.p[i - 1] * r1, xe * grid.v[i - 1]);

            let ec = w.mid.rho * w.mid.u * r2;
            let mut ep = Vector3::new(ec, ec * w.mid.u + w.mid.p * r2, ec * w.mid.v);

            if i == 3 {
                let etax = etax2(eta_cm);
                let ueta = (w.mid.u - w.back.u) * den1;
                let veta = (w.mid.v - w.back.v) * den1;
                let deldv = etax * ueta + etar2 * veta + w.back.v / r2m;
                let txx = 2.0 * mu * etax * ueta - two_thirds * mu * beta * deldv;
                let sigxr = mu * (etax * veta + etar2 * ueta);
                let trr = 2.0 * mu * etar2 * veta - two_thirds * mu * beta * deldv;
                let ew = w.back.rho * w.back.u * r2m;
                ec_p = Vector3::new(
                    ew,
                    ew * w.back.u + w.back.p * r2m - txx * r2m,
                    ew * w.back.v - sigxr * r2m,
                );
                let fw = w.back.rho * w.back.v * r2m;
                fc_p = Vector3::new(
                    fw,
                    fw * w.back.u - sigxr * r2m,
                    fw * w.back.v + w.back.p * r2m - trr * r2m,
                );
            }

            let etax_p = etax2(eta_c);
            let ueta = (w.front.u - w.mid.u) * den1;
            let veta = (w.front.v - w.mid.v) * den1;
            let deldv_p = etax_p * ueta + etar2 * veta + w.mid.v * r2;
            let txx = 2.0 * mu * etax_p * ueta - two_thirds * mu * beta * deldv_p;
            let sigxr = mu * (etax_p * veta + etar2 * ueta);
            let trr = 2.0 * mu * etar2 * veta - two_thirds * mu * beta * deldv_p;

            let ec_m = ec_p;
            let fc_m = fc_p;
            let en = w.mid.rho * w.mid.u * r2;
            ec_p = Vector3::new(
                en,
                en * w.mid.u + w.mid.p * r2 - txx * r2,
                en * w.mid.v - sigxr * r2,
            );
            let fn_ = w.mid.rho * w.mid.v * r2;
            fc_p = Vector3::new(
                fn_,
                fn_ * w.mid.u - sigxr * r2,
                fn_ * w.mid.v + w.mid.p * r2 - trr * r2,
            );

            let sig = -w.mid.p + 2.0 * mu * w.mid.v / r2 - two_thirds * mu * beta * deldv_p;
            let h = Vector3::new(0.0, 0.0, -sig);

            ep = 0.5
                * (ep + xep
                    - dx * etax_p * den1 * (ec_p - ec_m)
                    - dx * etar2 * den1 * (fc_p - fc_m)
                    + dx * h);

            let cons = ep / r2;
            let (corr, _) = branch.invert(i - 1, cons.x, cons.y, cons.z, h_inf);
            grid.rho[i - 1] = corr.rho;
            grid.u[i - 1] = corr.u;
            grid.v[i - 1] = corr.v;
            let dp = corr.p - grid.p[i - 1];
            grid.p[i - 1] = corr.p;
            residual = residual.max(dp.abs());
        }
    }

    // Wall closure: pressure copied down, density from the energy relation.
    grid.p[1] = grid.p[2];
    grid.rho[1] = GAMMA * grid.p[1] / ((GAMMA - 1.0) * h_inf);

    residual
}

#[cfg(test)]
mod tests {
    use super::*;
    use axi_core::units::{degrees, inches};
    use axi_geom::ConeBoundary;

    fn free() -> FreeStream {
        FreeStream::new(5.95, 2_179_168.0, 7.65034e-7, 2.0e-5)
    }

    fn cones() -> (ConeBoundary, ConeBoundary) {
        (
            ConeBoundary::new(degrees(10.0), inches(50.0)).unwrap(),
            ConeBoundary::new(degrees(22.0), inches(50.0)).unwrap(),
        )
    }

    #[test]
    fn wall_stays_at_no_slip_and_closes_from_station_two() {
        let fs = free();
        let (body, shock) = cones();
        let mut grid = FlowGrid::new(21, &fs);
        let frame = StationFrame::sample(0.1136, 0.114, &body, &shock, fs.mu_inf);
        let mut branch = BranchSelector::default();

        let residual = mac_cormack_sweep(&mut grid, &frame, &mut branch, &fs, 4.0e-4, -20.0);

        assert_eq!(grid.u[1], 0.0);
        assert_eq!(grid.v[1], 0.0);
        assert_eq!(grid.p[1], grid.p[2]);
        let rho_wall = GAMMA * grid.p[1] / ((GAMMA - 1.0) * fs.total_enthalpy);
        assert!((grid.rho[1] - rho_wall).abs() < 1.0e-15);
        // The first sweep away from a uniform start must move the field.
        assert!(residual > 1.0e-6);
    }

    #[test]
    fn shock_station_is_pinned_at_free_stream() {
        let fs = free();
        let (body, shock) = cones();
        let mut grid = FlowGrid::new(21, &fs);
        let frame = StationFrame::sample(0.1136, 0.114, &body, &shock, fs.mu_inf);
        let mut branch = BranchSelector::default();

        mac_cormack_sweep(&mut grid, &frame, &mut branch, &fs, 4.0e-4, -20.0);

        assert_eq!(grid.rho[21], 1.0);
        assert_eq!(grid.u[21], 1.0);
        assert_eq!(grid.v[21], 0.0);
        assert_eq!(grid.p[21], fs.pressure);
    }

    /// With zero viscosity, no smoothing, and straight-cone geometry a
    /// uniform free-stream column is transported unchanged; only the two
    /// stations touching the hardwired wall move.
    #[test]
    fn uniform_free_stream_is_an_inviscid_fixed_point_away_from_the_wall() {
        let fs = free();
        let (body, shock) = cones();
        let mut grid = FlowGrid::new(16, &fs);
        // Override no-slip: the whole column at free stream.
        grid.u[1] = 1.0;
        let frame = StationFrame::sample(0.2, 0.2004, &body, &shock, 0.0);
        let mut branch = BranchSelector::default();

        let residual = mac_cormack_sweep(&mut grid, &frame, &mut branch, &fs, 4.0e-4, 0.0);

        for i in 3..=16 {
            assert!((grid.rho[i] - 1.0).abs() < 1.0e-12, "rho at {i}");
            assert!((grid.u[i] - 1.0).abs() < 1.0e-12, "u at {i}");
            assert!(grid.v[i].abs() < 1.0e-12, "v at {i}");
            assert!((grid.p[i] - fs.pressure).abs() < 1.0e-12, "p at {i}");
        }
        // Station 2 is corrected against the wall slot and does change.
        assert!((grid.u[2] - 1.0).abs() > 1.0e-8);
        assert!(residual > 1.0e-8);
    }
}
