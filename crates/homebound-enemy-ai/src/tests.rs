#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use homebound_core::components::BehaviorState;
    use homebound_core::constants::*;
    use homebound_core::enums::*;
    use homebound_core::types::{Bounds, Position};

    use crate::fsm::{evaluate, hits_beam, hits_player, EnemyContext};
    use crate::placement;
    use crate::profiles;

    fn make_context(
        behavior: BehaviorState,
        position: Position,
        size: f64,
        level: u32,
        player: Position,
        elapsed: f64,
    ) -> EnemyContext {
        EnemyContext {
            behavior,
            position,
            size,
            level,
            player,
            home: Position::new(100.0, 100.0),
            bounds: Bounds::new(800.0, 500.0),
            elapsed_secs: elapsed,
        }
    }

    // ---- Hit tests ----

    #[test]
    fn test_hit_box_strictly_inside() {
        let pos = Position::new(100.0, 100.0);
        assert!(hits_player(pos, 14.0, Position::new(100.0, 100.0)));
        assert!(hits_player(pos, 14.0, Position::new(106.9, 100.0)));
        // Boundary contact is not a hit (open interval).
        assert!(!hits_player(pos, 14.0, Position::new(107.0, 100.0)));
        assert!(!hits_player(pos, 14.0, Position::new(100.0, 93.0)));
        assert!(!hits_player(pos, 14.0, Position::new(108.0, 100.0)));
    }

    #[test]
    fn test_beam_hit_within_tolerance() {
        let origin = Position::new(0.0, 0.0);
        let player = Position::new(100.0, 50.0);
        let on_beam = origin.bearing_to(&player);

        assert!(hits_beam(origin, on_beam, player));
        assert!(hits_beam(origin, on_beam + 0.009, player));
        assert!(!hits_beam(origin, on_beam + 0.02, player));
    }

    // ---- Demo ----

    #[test]
    fn test_demo_drifts_diagonally_and_never_expires() {
        let ctx = make_context(
            BehaviorState::Demo,
            Position::new(10.0, 20.0),
            DEMO_SIZE,
            1,
            Position::new(400.0, 250.0),
            1_000_000.0,
        );
        let update = evaluate(&ctx);
        assert_eq!(update.position, Position::new(11.0, 21.0));
        assert!(!update.expired);
        assert!(!update.hit_player);
    }

    #[test]
    fn test_demo_catches_overlapping_player() {
        let player = Position::new(50.0, 50.0);
        let ctx = make_context(
            BehaviorState::Demo,
            Position::new(49.0, 49.0),
            DEMO_SIZE,
            1,
            player,
            0.0,
        );
        let update = evaluate(&ctx);
        assert!(update.hit_player);
    }

    // ---- Stalk ----

    #[test]
    fn test_stalk_pursuit_is_asymmetric() {
        let speed = profiles::speed_for(EnemyKind::Stalk, 2);
        // Player straight to the right: the whole step lands on x, doubled.
        let ctx = make_context(
            BehaviorState::Stalk { speed },
            Position::new(0.0, 0.0),
            STALK_SIZE,
            2,
            Position::new(100.0, 0.0),
            0.0,
        );
        let update = evaluate(&ctx);
        assert!((update.position.x - 2.0 * speed).abs() < 1e-9);
        assert!(update.position.y.abs() < 1e-9);

        // Player straight below: only the y component moves, unscaled.
        let ctx = make_context(
            BehaviorState::Stalk { speed },
            Position::new(0.0, 0.0),
            STALK_SIZE,
            2,
            Position::new(0.0, 100.0),
            0.0,
        );
        let update = evaluate(&ctx);
        assert!(update.position.x.abs() < 1e-9);
        assert!((update.position.y - speed).abs() < 1e-9);
    }

    #[test]
    fn test_stalk_expiry_threshold() {
        let speed = profiles::speed_for(EnemyKind::Stalk, 2);
        let lifetime = profiles::lifetime_secs(EnemyKind::Stalk, 2).unwrap();
        // floor(ln(3)) = 1, so a level-2 stalker lives 3000 seconds.
        assert_eq!(lifetime, 3000.0);

        let before = make_context(
            BehaviorState::Stalk { speed },
            Position::new(0.0, 0.0),
            STALK_SIZE,
            2,
            Position::new(400.0, 250.0),
            lifetime - 0.1,
        );
        assert!(!evaluate(&before).expired);

        let at = make_context(
            BehaviorState::Stalk { speed },
            Position::new(0.0, 0.0),
            STALK_SIZE,
            2,
            Position::new(400.0, 250.0),
            lifetime,
        );
        assert!(evaluate(&at).expired);
    }

    // ---- Fencing ----

    #[test]
    fn test_fencing_corner_transition() {
        // Walking Up just above the fence's top edge flips to Left.
        let ctx = make_context(
            BehaviorState::Fencing {
                speed: 0.5,
                fence: 30.0,
                edge: FenceEdge::Up,
            },
            Position::new(130.0, 70.2),
            FENCING_SIZE,
            7,
            Position::new(400.0, 250.0),
            0.0,
        );
        let update = evaluate(&ctx);
        match update.behavior {
            BehaviorState::Fencing { edge, .. } => assert_eq!(edge, FenceEdge::Left),
            other => panic!("expected fencing state, got {other:?}"),
        }
    }

    #[test]
    fn test_fencing_full_patrol_cycle() {
        // Spawned at home + (fence, fence), heading Up; the patrol must
        // visit Up -> Left -> Down -> Right -> Up in that order.
        let mut ctx = make_context(
            BehaviorState::Fencing {
                speed: 1.0,
                fence: 30.0,
                edge: FenceEdge::Up,
            },
            Position::new(130.0, 130.0),
            FENCING_SIZE,
            7,
            Position::new(400.0, 250.0),
            0.0,
        );

        let mut seen = vec![FenceEdge::Up];
        for _ in 0..500 {
            let update = evaluate(&ctx);
            if let BehaviorState::Fencing { edge, .. } = update.behavior {
                if *seen.last().unwrap() != edge {
                    seen.push(edge);
                }
            }
            ctx.position = update.position;
            ctx.behavior = update.behavior;
            if seen.len() == 5 {
                break;
            }
        }

        assert_eq!(
            seen,
            vec![
                FenceEdge::Up,
                FenceEdge::Left,
                FenceEdge::Down,
                FenceEdge::Right,
                FenceEdge::Up,
            ]
        );
    }

    #[test]
    fn test_fencing_expiry_at_30_seconds() {
        let base = BehaviorState::Fencing {
            speed: 1.0,
            fence: 30.0,
            edge: FenceEdge::Up,
        };
        let before = make_context(
            base.clone(),
            Position::new(130.0, 100.0),
            FENCING_SIZE,
            7,
            Position::new(400.0, 250.0),
            29.9,
        );
        assert!(!evaluate(&before).expired);

        let at = make_context(
            base,
            Position::new(130.0, 100.0),
            FENCING_SIZE,
            7,
            Position::new(400.0, 250.0),
            30.0,
        );
        assert!(evaluate(&at).expired);
    }

    // ---- RandomWalk ----

    #[test]
    fn test_random_walk_bounces_at_right_edge() {
        // direction 0.0: full step on x, none on y.
        let ctx = make_context(
            BehaviorState::RandomWalk {
                speed: 1.0,
                direction: 0.0,
                x_dir: HorizontalDir::Right,
                y_dir: VerticalDir::Down,
            },
            Position::new(799.5, 100.0),
            RANDOM_WALK_SIZE,
            1,
            Position::new(50.0, 250.0),
            0.0,
        );
        let update = evaluate(&ctx);
        match update.behavior {
            BehaviorState::RandomWalk { x_dir, y_dir, .. } => {
                assert_eq!(x_dir, HorizontalDir::Left, "should reverse past the edge");
                assert_eq!(y_dir, VerticalDir::Down, "y axis is independent");
            }
            other => panic!("expected random walk state, got {other:?}"),
        }
        // y did not move: sin(0) = 0.
        assert!((update.position.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_random_walk_bounces_at_top_edge() {
        // direction 90.0 (consumed as radians): |sin| near 0.894.
        let ctx = make_context(
            BehaviorState::RandomWalk {
                speed: 2.0,
                direction: 90.0,
                x_dir: HorizontalDir::Left,
                y_dir: VerticalDir::Up,
            },
            Position::new(400.0, 1.0),
            RANDOM_WALK_SIZE,
            1,
            Position::new(50.0, 250.0),
            0.0,
        );
        let update = evaluate(&ctx);
        match update.behavior {
            BehaviorState::RandomWalk { y_dir, .. } => {
                assert_eq!(y_dir, VerticalDir::Down);
            }
            other => panic!("expected random walk state, got {other:?}"),
        }
    }

    #[test]
    fn test_random_walk_expiry_at_5_seconds() {
        let base = BehaviorState::RandomWalk {
            speed: 1.0,
            direction: 45.0,
            x_dir: HorizontalDir::Right,
            y_dir: VerticalDir::Down,
        };
        let before = make_context(
            base.clone(),
            Position::new(200.0, 200.0),
            RANDOM_WALK_SIZE,
            1,
            Position::new(50.0, 250.0),
            4.9,
        );
        assert!(!evaluate(&before).expired);

        let at = make_context(
            base,
            Position::new(200.0, 200.0),
            RANDOM_WALK_SIZE,
            1,
            Position::new(50.0, 250.0),
            5.0,
        );
        assert!(evaluate(&at).expired);
    }

    // ---- Straight ----

    #[test]
    fn test_straight_moves_on_fixed_bearing() {
        let ctx = make_context(
            BehaviorState::Straight {
                speed: 2.0,
                direction: 0.0,
            },
            Position::new(100.0, 100.0),
            STRAIGHT_SIZE,
            3,
            Position::new(700.0, 400.0),
            0.0,
        );
        let update = evaluate(&ctx);
        assert!((update.position.x - 102.0).abs() < 1e-9);
        assert!((update.position.y - 100.0).abs() < 1e-9);
        assert!(!update.expired);
    }

    #[test]
    fn test_straight_expires_when_leaving_viewport() {
        let ctx = make_context(
            BehaviorState::Straight {
                speed: 2.0,
                direction: 0.0,
            },
            Position::new(799.0, 100.0),
            STRAIGHT_SIZE,
            3,
            Position::new(50.0, 400.0),
            0.0,
        );
        let update = evaluate(&ctx);
        assert!(update.position.x > 800.0);
        assert!(update.expired);
    }

    // ---- Laser ----

    #[test]
    fn test_laser_charges_then_fires() {
        let base = BehaviorState::Laser {
            speed: 1.0,
            delay_secs: 0.5,
            direction: 0.3,
            phase: LaserPhase::Charging,
        };

        // Still charging before speed + delay.
        let ctx = make_context(
            base.clone(),
            Position::new(0.0, -1.0),
            LASER_SIZE,
            15,
            Position::new(400.0, 250.0),
            1.4,
        );
        let update = evaluate(&ctx);
        assert!(!update.just_fired);
        assert!(matches!(
            update.behavior,
            BehaviorState::Laser {
                phase: LaserPhase::Charging,
                ..
            }
        ));

        // Fires once elapsed reaches speed + delay.
        let ctx = make_context(
            base,
            Position::new(0.0, -1.0),
            LASER_SIZE,
            15,
            Position::new(400.0, 250.0),
            1.5,
        );
        let update = evaluate(&ctx);
        assert!(update.just_fired);
        assert!(matches!(
            update.behavior,
            BehaviorState::Laser {
                phase: LaserPhase::Firing,
                ..
            }
        ));
        // The transition tick itself does not evaluate the hit test.
        assert!(!update.hit_player);
    }

    #[test]
    fn test_laser_no_hit_while_charging() {
        let origin = Position::new(0.0, 0.0);
        let player = Position::new(100.0, 50.0);
        let ctx = make_context(
            BehaviorState::Laser {
                speed: 1.0,
                delay_secs: 0.0,
                direction: origin.bearing_to(&player),
                phase: LaserPhase::Charging,
            },
            origin,
            LASER_SIZE,
            15,
            player,
            0.5,
        );
        let update = evaluate(&ctx);
        assert!(!update.hit_player, "charging beam must not hit");
    }

    #[test]
    fn test_laser_firing_hit_and_expiry() {
        let origin = Position::new(0.0, 0.0);
        let player = Position::new(100.0, 50.0);
        let firing = BehaviorState::Laser {
            speed: 1.0,
            delay_secs: 0.5,
            direction: origin.bearing_to(&player),
            phase: LaserPhase::Firing,
        };

        let ctx = make_context(firing.clone(), origin, LASER_SIZE, 15, player, 2.0);
        let update = evaluate(&ctx);
        assert!(update.hit_player);
        assert!(!update.expired);

        // Expires at 2*speed + delay.
        let ctx = make_context(firing, origin, LASER_SIZE, 15, player, 2.5);
        let update = evaluate(&ctx);
        assert!(update.expired);
    }

    // ---- Profiles ----

    #[test]
    fn test_speed_curves_saturate() {
        // Walk/straight curves grow logarithmically: increments shrink.
        let early = profiles::speed_for(EnemyKind::RandomWalk, 2)
            - profiles::speed_for(EnemyKind::RandomWalk, 1);
        let late = profiles::speed_for(EnemyKind::RandomWalk, 10)
            - profiles::speed_for(EnemyKind::RandomWalk, 9);
        assert!(early > late);

        // Laser charge time decays toward a floor as levels climb.
        assert!(
            profiles::speed_for(EnemyKind::Laser, 100) < profiles::speed_for(EnemyKind::Laser, 1)
        );
        assert!(profiles::speed_for(EnemyKind::Laser, 1000) > 0.0);
    }

    #[test]
    fn test_speed_baselines() {
        // ln(1) = 0 anchors the walk/straight curves.
        assert!((profiles::speed_for(EnemyKind::RandomWalk, 1) - 3.7).abs() < 1e-9);
        assert!(profiles::speed_for(EnemyKind::Straight, 1).abs() < 1e-9);
        assert!((profiles::speed_for(EnemyKind::Laser, 1) - 10.0 / 1.01 / 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_archetype_table() {
        assert_eq!(profiles::archetype(EnemyKind::Stalk).size, STALK_SIZE);
        assert_eq!(profiles::archetype(EnemyKind::Stalk).color, ColorTag::Magenta);
        assert_eq!(profiles::archetype(EnemyKind::Straight).size, STRAIGHT_SIZE);
        assert_eq!(profiles::archetype(EnemyKind::Laser).color, ColorTag::Black);
    }

    #[test]
    fn test_lifetimes_by_kind() {
        assert_eq!(profiles::lifetime_secs(EnemyKind::Demo, 5), None);
        assert_eq!(profiles::lifetime_secs(EnemyKind::Straight, 5), None);
        assert_eq!(profiles::lifetime_secs(EnemyKind::Laser, 5), None);
        assert_eq!(profiles::lifetime_secs(EnemyKind::Fencing, 5), Some(30.0));
        assert_eq!(profiles::lifetime_secs(EnemyKind::RandomWalk, 5), Some(5.0));
    }

    // ---- Placement ----

    #[test]
    fn test_spawn_coord_avoids_player_window() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let c = placement::random_coord_excluding(&mut rng, 800.0, 400.0, 20.0);
            assert!((0.0..800.0).contains(&c));
            assert!(
                c < 380.0 || c >= 420.0,
                "coordinate {c} landed inside the exclusion window"
            );
        }
    }

    #[test]
    fn test_direction_is_whole_degrees() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let d = placement::random_direction_degrees(&mut rng);
            assert!((0.0..360.0).contains(&d));
            assert_eq!(d, d.trunc());
        }
    }

    #[test]
    fn test_fence_half_width_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let f = placement::random_fence_half_width(&mut rng);
            assert!((FENCE_MIN..FENCE_MAX).contains(&f));
        }
    }

    #[test]
    fn test_laser_x_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let x = placement::random_laser_x(&mut rng, 800.0);
            assert!((-800.0..1600.0).contains(&x));
        }
    }
}
