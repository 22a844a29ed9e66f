//! Pure computation helpers extracted for testability.
//!
//! All functions in this module are free of Bevy ECS dependencies and operate
//! on plain numeric / `Vec3` inputs, making them straightforward to unit-test
//! without spinning up a renderer.

use bevy::prelude::Vec3;

/// Quintic smootherstep ease curve: `6t⁵ − 15t⁴ + 10t³`.
///
/// Zero first *and* second derivative at both ends, so camera motion
/// accelerates and decelerates without any visible kick.
///
/// `t` is clamped into `[0, 1]` before evaluation.
///
/// # Examples
/// ```
/// # use crt_menu::math::smootherstep;
/// assert_eq!(smootherstep(0.0), 0.0);
/// assert_eq!(smootherstep(1.0), 1.0);
/// assert_eq!(smootherstep(0.5), 0.5);
/// ```
pub fn smootherstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Raw progress through a segment: `clamp(elapsed / duration, 0, 1)`.
///
/// Negative elapsed time (clock skew) is treated as zero rather than
/// propagated. `duration` must be positive; [`CameraSegment`] guarantees it.
pub fn segment_progress(elapsed: f32, duration: f32) -> f32 {
    (elapsed.max(0.0) / duration).clamp(0.0, 1.0)
}

/// One camera interpolation segment, selected by the current phase.
///
/// Immutable description of a fly from `start` to `end` over `duration`
/// seconds. Field of view is interpolated only when both endpoints are set;
/// otherwise the camera keeps whatever fov it already has.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraSegment {
    /// World-space position at `elapsed = 0`.
    pub start: Vec3,
    /// World-space position at `elapsed >= duration`.
    pub end: Vec3,
    /// Vertical fov (radians) at the segment start, if animated.
    pub start_fov: Option<f32>,
    /// Vertical fov (radians) at the segment end, if animated.
    pub end_fov: Option<f32>,
    /// Segment length in seconds. Must be positive and nonzero.
    pub duration: f32,
}

/// The camera pose produced for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoseSample {
    /// Interpolated world-space position.
    pub position: Vec3,
    /// Interpolated vertical fov (radians), or `None` to keep the current one.
    pub fov: Option<f32>,
}

/// Samples a segment at `elapsed` seconds after its start.
///
/// Pure function of `(segment, elapsed)`. Once progress reaches 1 the
/// endpoint values are returned *exactly* (no float drift from the lerp), so
/// repeated calls with ever larger elapsed times are idempotent.
pub fn sample_segment(seg: &CameraSegment, elapsed: f32) -> PoseSample {
    let t = segment_progress(elapsed, seg.duration);
    if t >= 1.0 {
        return PoseSample {
            position: seg.end,
            fov: match (seg.start_fov, seg.end_fov) {
                (Some(_), Some(b)) => Some(b),
                _ => None,
            },
        };
    }
    let eased = smootherstep(t);
    let fov = match (seg.start_fov, seg.end_fov) {
        (Some(a), Some(b)) => Some(a + (b - a) * eased),
        _ => None,
    };
    PoseSample {
        position: seg.start.lerp(seg.end, eased),
        fov,
    }
}

/// Height of the CRT glass bulge at a point on the screen plane.
///
/// `z = curvature * (x² + y²)`: a shallow paraboloid that makes the screen
/// swell toward the viewer at the center, like real tube glass.
pub fn crt_bulge(x: f32, y: f32, curvature: f32) -> f32 {
    curvature * (x * x + y * y)
}

/// Computes the face normal of a triangle defined by three vertices.
///
/// Uses the cross product of edges `(v1 - v0)` and `(v2 - v0)`.
/// Returns `Vec3::ZERO` if the triangle is degenerate (collinear points).
pub fn compute_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    edge1.cross(edge2).normalize_or_zero()
}

/// Opacity of a fade-in that starts `delay` seconds after mount and runs for
/// `duration` seconds, eased by [`smootherstep`].
///
/// Returns 0 for the whole delay window and pins at exactly 1 once complete.
pub fn fade_in_alpha(elapsed: f32, delay: f32, duration: f32) -> f32 {
    smootherstep(segment_progress(elapsed - delay, duration))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── smootherstep ────────────────────────────────────────────────

    #[test]
    fn smootherstep_at_zero_is_zero() {
        assert_eq!(smootherstep(0.0), 0.0);
    }

    #[test]
    fn smootherstep_at_one_is_one() {
        assert_eq!(smootherstep(1.0), 1.0);
    }

    #[test]
    fn smootherstep_at_half_is_half() {
        assert!((smootherstep(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn smootherstep_is_monotonically_non_decreasing() {
        let steps: Vec<f32> = (0..=100).map(|i| smootherstep(i as f32 / 100.0)).collect();
        for w in steps.windows(2) {
            assert!(w[1] >= w[0], "smootherstep must be non-decreasing");
        }
    }

    #[test]
    fn smootherstep_clamps_out_of_range_input() {
        assert_eq!(smootherstep(-3.0), 0.0);
        assert_eq!(smootherstep(42.0), 1.0);
    }

    // ── segment_progress ────────────────────────────────────────────

    #[test]
    fn progress_at_zero_elapsed_is_zero() {
        assert_eq!(segment_progress(0.0, 3.0), 0.0);
    }

    #[test]
    fn progress_negative_elapsed_treated_as_zero() {
        assert_eq!(segment_progress(-1.5, 3.0), 0.0);
    }

    #[test]
    fn progress_past_duration_clamps_to_one() {
        assert_eq!(segment_progress(7.0, 3.0), 1.0);
    }

    // ── sample_segment ──────────────────────────────────────────────

    fn zoom_segment() -> CameraSegment {
        CameraSegment {
            start: Vec3::new(0.0, 0.0, -10.0),
            end: Vec3::new(0.0, 0.0, -3.0),
            start_fov: Some(0.9),
            end_fov: Some(0.6),
            duration: 3.0,
        }
    }

    #[test]
    fn sample_at_zero_is_exactly_start() {
        let pose = sample_segment(&zoom_segment(), 0.0);
        assert_eq!(pose.position, Vec3::new(0.0, 0.0, -10.0));
        assert_eq!(pose.fov, Some(0.9));
    }

    #[test]
    fn sample_at_midpoint_matches_eased_lerp() {
        // smootherstep(0.5) = 0.5, so the midpoint lands halfway.
        let pose = sample_segment(&zoom_segment(), 1.5);
        assert!((pose.position.z - (-6.5)).abs() < 1e-5);
        assert!((pose.fov.unwrap() - 0.75).abs() < 1e-5);
    }

    #[test]
    fn sample_past_duration_is_exactly_end() {
        let seg = zoom_segment();
        let pose = sample_segment(&seg, 3.0);
        assert_eq!(pose.position, seg.end);
        assert_eq!(pose.fov, Some(0.6));
    }

    #[test]
    fn sample_is_idempotent_after_completion() {
        let seg = zoom_segment();
        let done = sample_segment(&seg, seg.duration);
        for elapsed in [3.1, 10.0, 1e6] {
            assert_eq!(sample_segment(&seg, elapsed), done);
        }
    }

    #[test]
    fn sample_negative_elapsed_equals_zero_elapsed() {
        let seg = zoom_segment();
        assert_eq!(sample_segment(&seg, -2.0), sample_segment(&seg, 0.0));
    }

    #[test]
    fn sample_without_fov_endpoints_leaves_fov_unset() {
        let seg = CameraSegment {
            start_fov: None,
            end_fov: None,
            ..zoom_segment()
        };
        assert_eq!(sample_segment(&seg, 1.0).fov, None);
        assert_eq!(sample_segment(&seg, 5.0).fov, None);
    }

    #[test]
    fn sample_with_only_start_fov_does_not_interpolate() {
        let seg = CameraSegment {
            end_fov: None,
            ..zoom_segment()
        };
        assert_eq!(sample_segment(&seg, 1.5).fov, None);
        // Completion must not snap the fov either; unset means unset
        // for the whole segment, however far past its end.
        assert_eq!(sample_segment(&seg, 3.0).fov, None);
        assert_eq!(sample_segment(&seg, 100.0).fov, None);
    }

    #[test]
    fn sample_with_only_end_fov_does_not_interpolate() {
        let seg = CameraSegment {
            start_fov: None,
            ..zoom_segment()
        };
        assert_eq!(sample_segment(&seg, 1.5).fov, None);
        assert_eq!(sample_segment(&seg, 100.0).fov, None);
    }

    // ── crt_bulge ───────────────────────────────────────────────────

    #[test]
    fn bulge_is_flat_at_center() {
        assert_eq!(crt_bulge(0.0, 0.0, 0.2), 0.0);
    }

    #[test]
    fn bulge_grows_with_radius() {
        let near = crt_bulge(0.1, 0.1, 0.2);
        let far = crt_bulge(0.8, 0.55, 0.2);
        assert!(far > near);
    }

    #[test]
    fn bulge_is_symmetric() {
        assert_eq!(crt_bulge(0.4, -0.3, 0.2), crt_bulge(-0.4, 0.3, 0.2));
    }

    // ── compute_normal ──────────────────────────────────────────────

    #[test]
    fn normal_of_xy_plane_triangle() {
        let n = compute_normal(Vec3::ZERO, Vec3::X, Vec3::Y);
        assert!((n - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn degenerate_triangle_returns_zero() {
        let n = compute_normal(Vec3::ZERO, Vec3::X, Vec3::X * 2.0);
        assert_eq!(n, Vec3::ZERO);
    }

    // ── fade_in_alpha ───────────────────────────────────────────────

    #[test]
    fn fade_is_invisible_during_delay() {
        assert_eq!(fade_in_alpha(0.0, 3.2, 0.5), 0.0);
        assert_eq!(fade_in_alpha(3.1, 3.2, 0.5), 0.0);
    }

    #[test]
    fn fade_is_opaque_after_completion() {
        assert_eq!(fade_in_alpha(3.7, 3.2, 0.5), 1.0);
        assert_eq!(fade_in_alpha(60.0, 3.2, 0.5), 1.0);
    }

    #[test]
    fn fade_is_partial_mid_ramp() {
        let a = fade_in_alpha(3.45, 3.2, 0.5);
        assert!(a > 0.0 && a < 1.0);
    }
}
