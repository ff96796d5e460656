use determinant_graph::components::network_graph::{
	ChartConfig, DrawCommand, Frame, GraphBuilder, InteractionState, Point, Record, SizeScale,
	cluster_centers, find_nearest,
};
use determinant_graph::data::parse_records;

fn rows() -> Vec<Record> {
	vec![
		Record::new().with("ID", "1").with("Cat", "A").with("Cites", "5"),
		Record::new().with("ID", "2").with("Cat", "A").with("Cites", "15"),
		Record::new().with("ID", "3").with("Cat", "B").with("Cites", "10"),
	]
}

#[test]
fn small_dataset_builds_clusters_and_draws() {
	let mut graph = GraphBuilder::new("Cat", "Cat").build(&rows(), "Unknown Column");
	assert_eq!(graph.nodes.len(), 3);
	assert_eq!(graph.edges.len(), 1);
	let edge = graph.edges[0];
	assert_eq!((edge.source, edge.target), (0, 1));
	assert!(edge.primary);

	let categories = graph.categories();
	assert_eq!(categories, vec!["A".to_owned(), "B".to_owned()]);
	let centers = cluster_centers(800.0, 600.0, &categories);
	assert_eq!(centers["A"], Point::new(400.0, 300.0));
	assert_eq!(centers["B"], Point::new(475.0, 300.0));

	let config = ChartConfig::default();
	SizeScale::build(&graph.nodes, "Cites", config.node_radius).assign(&mut graph.nodes);
	let radii = graph.nodes.iter().map(|n| n.radius).collect::<Vec<_>>();
	assert_eq!(radii, vec![2.0, 20.0, 11.0]);

	let positions = vec![
		Point::new(100.0, 100.0),
		Point::new(140.0, 100.0),
		Point::new(300.0, 300.0),
	];
	assert_eq!(find_nearest(&positions, Point::new(135.0, 102.0), 20.0), Some(1));

	let mut interaction = InteractionState::default();
	interaction.on_pointer_move(Point::new(295.0, 300.0), config.search_radius(), &positions);
	assert_eq!(interaction.displayed(), Some(2));

	let frame = Frame {
		config: &config,
		nodes: &graph.nodes,
		edges: &graph.edges,
		positions: &positions,
		interaction: &interaction,
	};
	let commands = frame.commands();
	assert_eq!(commands.len(), 4);
	match &commands[0] {
		DrawCommand::Line { color, width, alpha, .. } => {
			assert_eq!(color, "#cccccc");
			assert_eq!(*width, 1.5);
			assert_eq!(*alpha, config.faded_alpha);
		}
		other => panic!("expected the edge first, got {other:?}"),
	}
	match &commands[3] {
		DrawCommand::Circle { stroke, alpha, .. } => {
			assert_eq!(stroke, "#000000");
			assert_eq!(*alpha, 1.0);
		}
		other => panic!("expected the hovered node last, got {other:?}"),
	}
}

#[test]
fn decoded_json_feeds_the_builder() {
	let records = parse_records(
		r#"[
			{"ID": 1, "Social Determinant Category": "Health", "Primary Determinant Analyzed": "Access"},
			{"ID": 2, "Social Determinant Category": "Health", "Primary Determinant Analyzed": "Access"},
			{"ID": null, "Social Determinant Category": "Health"}
		]"#,
	)
	.unwrap();
	let graph =
		GraphBuilder::from_config(&ChartConfig::default()).build(&records, "Aligned SDG");
	assert_eq!(graph.nodes.len(), 2);
	assert_eq!(graph.edges.len(), 1);
}
