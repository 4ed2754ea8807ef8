#[cfg(test)]
mod tests {
    use petri::{
        Attribute, Automaton, AutomatonConfig, CellBehavior, ConstantRandom, Error,
        ExportMapping, InitContext, RandomSource, SequenceRandom, ValueMapping,
    };

    #[derive(Default, Clone)]
    struct Rock {
        initialized: bool,
        weight: i64,
    }

    impl CellBehavior for Rock {
        fn initialize(&mut self, _ctx: &mut InitContext<'_>) {
            self.initialized = true;
        }

        fn attribute(&self, name: &str) -> Option<Attribute> {
            (name == "weight").then_some(Attribute::Int(self.weight))
        }
    }

    #[derive(Default, Clone)]
    struct Sand;

    impl CellBehavior for Sand {
        fn initialize(&mut self, _ctx: &mut InitContext<'_>) {}
    }

    fn automaton(w: i64, h: i64, random: impl RandomSource + 'static) -> Automaton {
        let mut a = AutomatonConfig::new(w, h)
            .build_with(Box::new(random))
            .unwrap();
        a.register_cell_type("rock", Rock::default);
        a.register_cell_type("sand", || Sand);
        a
    }

    fn types(a: &Automaton) -> Vec<Option<String>> {
        let mut result = vec![];
        for y in 0..a.height() as i64 {
            for x in 0..a.width() as i64 {
                result.push(
                    a.cell_at(x, y)
                        .and_then(|c| a.classify(c))
                        .map(str::to_string),
                );
            }
        }
        result
    }

    #[test]
    fn test_even_split_boundary() {
        let mut a = automaton(10, 10, ConstantRandom(0.49));
        a.populate_by_distribution(&[("rock", 1.), ("sand", 1.)]).unwrap();
        assert!(types(&a).iter().all(|t| t.as_deref() == Some("rock")));

        let mut b = automaton(10, 10, ConstantRandom(0.51));
        b.populate_by_distribution(&[("rock", 1.), ("sand", 1.)]).unwrap();
        assert!(types(&b).iter().all(|t| t.as_deref() == Some("sand")));

        let mut c = automaton(2, 2, ConstantRandom(0.5));
        c.populate_by_distribution(&[("rock", 1.), ("sand", 1.)]).unwrap();
        assert!(types(&c).iter().all(|t| t.as_deref() == Some("rock")));
    }

    #[test]
    fn test_weighted_order() {
        let mut a = automaton(4, 1, SequenceRandom::new([0.1, 0.3, 0.9, 0.25]));
        a.populate_by_distribution(&[("rock", 1.), ("sand", 3.)]).unwrap();
        let expected = ["rock", "sand", "sand", "rock"];
        let actual = types(&a);
        for (t, e) in actual.iter().zip(expected) {
            assert_eq!(t.as_deref(), Some(e));
        }
    }

    #[test]
    fn test_non_positive_weights_are_never_drawn() {
        let mut a = automaton(3, 3, ConstantRandom(0.));
        a.populate_by_distribution(&[("sand", 0.), ("rock", 2.), ("sand", -1.)])
            .unwrap();
        assert!(types(&a).iter().all(|t| t.as_deref() == Some("rock")));
    }

    #[test]
    fn test_population_initializes_and_resets_clock() {
        let mut a = automaton(3, 2, ConstantRandom(0.));
        a.populate_by_distribution(&[("rock", 1.)]).unwrap();
        a.steps(5);
        a.populate_by_distribution(&[("rock", 1.)]).unwrap();
        assert_eq!(a.current_generation(), 0);
        for cell in a.grid().cells() {
            assert!(cell.downcast_ref::<Rock>().unwrap().initialized);
        }
    }

    #[test]
    fn test_failed_population_leaves_grid() {
        let mut a = automaton(2, 2, ConstantRandom(0.7));
        a.populate_by_distribution(&[("sand", 1.)]).unwrap();
        a.step();

        assert_eq!(a.populate_by_distribution(&[]), Err(Error::EmptyDistribution));
        assert_eq!(
            a.populate_by_distribution(&[("rock", 0.), ("sand", -2.)]),
            Err(Error::EmptyDistribution)
        );
        assert_eq!(
            a.populate_by_distribution(&[("rock", 1.), ("lava", 1.)]),
            Err(Error::UnknownType("lava".to_string()))
        );
        assert!(types(&a).iter().all(|t| t.as_deref() == Some("sand")));
        assert_eq!(a.current_generation(), 1);
    }

    #[test]
    fn test_value_grid_import() {
        let mut a = automaton(3, 2, ConstantRandom(0.));
        a.steps(2);
        let grid = [[1, 0, 2], [2, 7, 1]];
        let mut created = 0;
        a.populate_from_value_grid(
            &grid,
            [
                ValueMapping::new(1, "rock").on_create(|cell| {
                    created += 1;
                    if let Some(rock) = cell.downcast_mut::<Rock>() {
                        rock.weight = 5;
                    }
                }),
                ValueMapping::new(2, "sand"),
                ValueMapping::new(1, "sand"),
            ],
        )
        .unwrap();
        assert_eq!(created, 2);
        assert_eq!(a.current_generation(), 2);

        let expected = [
            Some("rock"),
            None,
            Some("sand"),
            Some("sand"),
            None,
            Some("rock"),
        ];
        let actual = types(&a);
        for (t, e) in actual.iter().zip(expected) {
            assert_eq!(t.as_deref(), e);
        }
        let rock = a.cell_at(0, 0).and_then(|c| c.downcast_ref::<Rock>()).unwrap();
        assert_eq!(rock.weight, 5);
        assert!(!rock.initialized);
    }

    #[test]
    fn test_value_grid_import_unknown_type() {
        let mut a = automaton(1, 1, ConstantRandom(0.));
        a.populate_by_distribution(&[("sand", 1.)]).unwrap();
        let err = a
            .populate_from_value_grid(&[vec![0]], [ValueMapping::new(0, "lava")])
            .unwrap_err();
        assert_eq!(err, Error::UnknownType("lava".to_string()));
        assert!(a.cell_at(0, 0).is_some());
    }

    #[test]
    fn test_value_grid_shape_mismatch() {
        let mut a = automaton(3, 3, ConstantRandom(0.));
        a.populate_from_value_grid(&[vec![1, 1, 1, 1], vec![1]], [ValueMapping::new(1, "rock")])
            .unwrap();
        let occupied = types(&a).iter().filter(|t| t.is_some()).count();
        assert_eq!(occupied, 4);
    }

    #[test]
    fn test_export_round_trip() {
        let source = [[0, 1, 2, 1], [2, 2, 0, 1], [1, 0, 0, 2]];
        let mut a = automaton(4, 3, ConstantRandom(0.));
        a.populate_from_value_grid(
            &source,
            [ValueMapping::new(1, "rock"), ValueMapping::new(2, "sand")],
        )
        .unwrap();
        let before = types(&a);

        let exported = a.export_value_grid(
            0,
            &[
                ExportMapping::new("rock", |_, _, _| 1),
                ExportMapping::new("sand", |_, _, _| 2),
            ],
        );
        assert_eq!(exported, source.iter().map(|r| r.to_vec()).collect::<Vec<_>>());

        a.populate_from_value_grid(
            &exported,
            [ValueMapping::new(1, "rock"), ValueMapping::new(2, "sand")],
        )
        .unwrap();
        assert_eq!(types(&a), before);
    }

    #[test]
    fn test_export_defaults() {
        let mut a = automaton(2, 2, SequenceRandom::new([0.1, 0.9]));
        a.populate_by_distribution(&[("rock", 1.), ("sand", 1.)]).unwrap();
        let exported = a.export_value_grid(
            -1,
            &[ExportMapping::new("rock", |x, y, _| (x + 10 * y) as i32)],
        );
        assert_eq!(exported, vec![vec![0, -1], vec![10, -1]]);

        a.deregister_cell_type("rock");
        let exported = a.export_value_grid(-1, &[ExportMapping::new("rock", |_, _, _| 1)]);
        assert_eq!(exported, vec![vec![-1, -1], vec![-1, -1]]);
    }
}
