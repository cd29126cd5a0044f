use std::error::Error;
use subnet_planner::models::SubnetRequest;
use subnet_planner::output::{print_auto_fit, print_plan};
use subnet_planner::{plan_auto_fit, plan_single_range};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();

    log::info!("#Start main()");

    let requests = vec![
        SubnetRequest {
            name: "desktops".to_string(),
            vlan_id: 10,
            expected_devices: 100,
            growth_percent: 100,
        },
        SubnetRequest {
            name: "voip".to_string(),
            vlan_id: 20,
            expected_devices: 40,
            growth_percent: 100,
        },
        SubnetRequest {
            name: "printers".to_string(),
            vlan_id: 30,
            expected_devices: 5,
            growth_percent: 50,
        },
    ];

    let plan = plan_single_range("10.1.240.0", &requests)?;
    print_plan(&plan);

    let result = plan_auto_fit("10.1.244.0/22\n10.1.241.0/24\n", &requests)?;
    print_auto_fit(&result);

    if std::env::var("PLAN_JSON").is_ok() {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    }

    Ok(())
}
