use bevy::prelude::*;

pub fn ray_hits_obb(origin: Vec3, dir: Vec3, xf: &GlobalTransform, size: Vec3) -> Option<f32> {
    let inv = xf.compute_matrix().inverse();
    let o_local = inv.transform_point3(origin);
    let d_local = inv.transform_vector3(dir);
    let he = size * 0.5;
    ray_aabb_hit_t(o_local, d_local, -he, he)
}

// Slab-method ray–AABB intersection, returns Some(t) or None
pub fn ray_aabb_hit_t(ray_origin: Vec3, ray_direction: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let inv = ray_direction.recip();

    let t1 = (min - ray_origin) * inv;
    let t2 = (max - ray_origin) * inv;

    let tmin = t1.min(t2).max_element();
    let tmax = t1.max(t2).min_element();

    if tmin > tmax || tmax < 0.0 {
        return None;
    }
    Some(if tmin >= 0.0 { tmin } else { tmax })
}

/// Nearest entity whose pick box is crossed by the ray in front of the origin.
pub fn closest_hit<'a>(
    origin: Vec3,
    dir: Vec3,
    candidates: impl IntoIterator<Item = (Entity, &'a GlobalTransform, Vec3)>,
) -> Option<Entity> {
    candidates
        .into_iter()
        .filter_map(|(entity, xf, size)| {
            ray_hits_obb(origin, dir, xf, size).map(|t| (entity, t))
        })
        .filter(|(_, t)| *t > 0.0)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(entity, _)| entity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_through_box_center_hits_near_face() {
        let t = ray_aabb_hit_t(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z, Vec3::splat(-1.0), Vec3::ONE);
        assert_eq!(t, Some(4.0));
    }

    #[test]
    fn ray_pointing_away_misses() {
        let t = ray_aabb_hit_t(Vec3::new(0.0, 0.0, 5.0), Vec3::Z, Vec3::splat(-1.0), Vec3::ONE);
        assert_eq!(t, None);
    }

    #[test]
    fn scaled_transform_grows_pick_volume() {
        let small = GlobalTransform::from(Transform::from_xyz(0.8, 0.0, 0.0));
        let large = GlobalTransform::from(
            Transform::from_xyz(0.8, 0.0, 0.0).with_scale(Vec3::splat(2.0)),
        );
        let origin = Vec3::new(0.0, 0.0, 5.0);

        assert!(ray_hits_obb(origin, Vec3::NEG_Z, &small, Vec3::ONE).is_none());
        assert!(ray_hits_obb(origin, Vec3::NEG_Z, &large, Vec3::ONE).is_some());
    }

    #[test]
    fn closest_hit_prefers_nearest_box() {
        let mut world = World::new();
        let far = world.spawn_empty().id();
        let near = world.spawn_empty().id();
        let far_xf = GlobalTransform::from(Transform::from_xyz(0.0, 0.0, -5.0));
        let near_xf = GlobalTransform::from(Transform::from_xyz(0.0, 0.0, 0.0));

        let hit = closest_hit(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::NEG_Z,
            [(far, &far_xf, Vec3::ONE), (near, &near_xf, Vec3::ONE)],
        );
        assert_eq!(hit, Some(near));
    }
}
