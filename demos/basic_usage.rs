//! Basic build -> query -> mutate flow.

use ugraph::*;

fn main() -> GraphResult<()> {
    // Build a small rail network
    let mut builder = GraphBuilder::new();
    let ids = builder.vertices(vec!["amsterdam", "berlin", "copenhagen", "dresden"]);
    let (ams, ber, cph, drs) = (ids[0], ids[1], ids[2], ids[3]);
    builder.edge(ams, ber);
    builder.edge(ber, cph);
    builder.edge(ber, drs);

    let mut graph = builder.build()?;

    println!(
        "Graph created with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    // Query: everything reachable from Amsterdam, nearest first
    let reachable = graph.breadth_first_search(ams)?;
    println!("Reachable from amsterdam: {:?}", reachable);

    // Query: how many hops from Amsterdam to Dresden?
    match graph.shortest_path_distance(ams, drs)? {
        Some(distance) => println!("amsterdam -> dresden: {} hops", distance),
        None => println!("amsterdam -> dresden: unreachable"),
    }

    // Mutate: drop Berlin and everything falls apart
    graph.remove_vertex(ber)?;
    match graph.shortest_path_distance(ams, drs)? {
        Some(distance) => println!("without berlin: {} hops", distance),
        None => println!("without berlin: unreachable"),
    }

    Ok(())
}
