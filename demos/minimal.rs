use huoguoml::{backend::rest::Server, tracking::TrackingRun};
use nanorand::{WyRand, RNG};

fn main() {
    const EXPERIMENT: &str = "mnist";
    let mut client = Server::new("http://127.0.0.1:8080");

    for i in 0..3u64 {
        println!("Executing run {}", i);
        let mut run = TrackingRun::start(&mut client, EXPERIMENT).expect("Could not open a run");
        run.log_parameter("i", &format!("{}", i));
        run.log_parameter("learning_rate", "0.01");
        run.log_tag("demo", "true");

        let mut rng = WyRand::new_seed(i);
        let int: f64 = rng.generate::<u16>().into();
        let max: f64 = std::u16::MAX.into();
        run.log_metric("accuracy", &format!("{}", int / max));

        run.finish(&mut client).expect("Could not submit the run");
    }
}
