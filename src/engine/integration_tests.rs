use crate::application::Application;
use crate::builders::{ManualBuilder, VehicleBuilder};
use crate::config::BuildOrder;
use crate::engine::Director;
use crate::products::SteeringSide;
use crate::traits::Builder;

/// End-to-end tests: director + real builders + application rendering
#[cfg(test)]
mod tests {
    use super::*;

    fn order(seats: u32, engine: &str, steering: SteeringSide, gps: bool) -> BuildOrder {
        BuildOrder {
            seats,
            engine: engine.to_string(),
            steering,
            gps,
        }
    }

    #[test]
    fn test_left_hand_v8_with_gps() {
        let delivery = Application::new()
            .make_vehicle(&order(4, "V8", SteeringSide::Left, true))
            .expect("construction should succeed");

        assert_eq!(
            delivery.vehicle.to_string(),
            "Vehicle with 4 seats, V8 engine, left-hand-drive, with GPS."
        );
        assert_eq!(
            delivery.manual.sentences(),
            [
                "This vehicle has 4 seats.",
                "This vehicle is equipped with a V8 engine.",
                "This vehicle is left-hand drive.",
                "This vehicle is equipped with GPS.",
            ]
        );
    }

    #[test]
    fn test_right_hand_electric_without_gps() {
        let delivery = Application::new()
            .make_vehicle(&order(2, "electric", SteeringSide::Right, false))
            .expect("construction should succeed");

        assert_eq!(
            delivery.vehicle.to_string(),
            "Vehicle with 2 seats, electric engine, right-hand-drive, without GPS."
        );
        assert_eq!(delivery.manual.gps(), "This vehicle is not equipped with GPS.");
        assert_eq!(delivery.manual.steering(), "This vehicle is right-hand drive.");
    }

    #[test]
    fn test_every_input_combination_reaches_both_products() {
        let director = Director::new();

        for seats in [0, 1, 4, 9, u32::MAX] {
            for engine in ["V8", "electric", "1.6L turbo"] {
                for steering in [SteeringSide::Left, SteeringSide::Right] {
                    for gps in [true, false] {
                        let mut vehicle_builder = VehicleBuilder::new();
                        director
                            .construct_product(&mut vehicle_builder, seats, engine, steering, gps)
                            .unwrap();
                        let vehicle = vehicle_builder.take_result().unwrap();

                        assert_eq!(vehicle.seats(), seats);
                        assert_eq!(vehicle.engine(), engine);
                        assert_eq!(vehicle.steering(), steering);
                        assert_eq!(vehicle.has_gps(), gps);

                        let mut manual_builder = ManualBuilder::new();
                        director
                            .construct_product(&mut manual_builder, seats, engine, steering, gps)
                            .unwrap();
                        let manual = manual_builder.take_result().unwrap();

                        assert!(manual.seats().contains(&seats.to_string()));
                        assert!(manual.engine().contains(engine));
                        assert!(manual.steering().contains(steering.hand()));
                        assert_eq!(manual.gps().contains("not"), !gps);
                    }
                }
            }
        }
    }

    #[test]
    fn test_builders_do_not_observe_each_other() {
        let director = Director::new();
        let mut vehicle_builder = VehicleBuilder::new();
        let mut manual_builder = ManualBuilder::new();

        director
            .construct_product(&mut vehicle_builder, 4, "V8", SteeringSide::Left, true)
            .unwrap();
        director
            .construct_product(&mut manual_builder, 2, "electric", SteeringSide::Right, false)
            .unwrap();

        let vehicle = vehicle_builder.take_result().unwrap();
        let manual = manual_builder.take_result().unwrap();

        assert_eq!(
            vehicle.to_string(),
            "Vehicle with 4 seats, V8 engine, left-hand-drive, with GPS."
        );
        assert_eq!(manual.seats(), "This vehicle has 2 seats.");
        assert_eq!(manual.gps(), "This vehicle is not equipped with GPS.");
    }

    #[test]
    fn test_builders_can_run_on_separate_threads() {
        let order = order(6, "V12", SteeringSide::Right, true);

        let (vehicle, manual) = std::thread::scope(|scope| {
            let vehicle = scope.spawn(|| {
                let mut builder = VehicleBuilder::new();
                Director::new().construct_from_order(&mut builder, &order)?;
                builder.take_result()
            });
            let manual = scope.spawn(|| {
                let mut builder = ManualBuilder::new();
                Director::new().construct_from_order(&mut builder, &order)?;
                builder.take_result()
            });
            (vehicle.join().unwrap(), manual.join().unwrap())
        });

        assert_eq!(Application::new().make_vehicle(&order).unwrap().vehicle, vehicle.unwrap());
        assert_eq!(Application::new().make_vehicle(&order).unwrap().manual, manual.unwrap());
    }

    #[test]
    fn test_delivery_renders_vehicle_then_manual() {
        let delivery = Application::new()
            .make_vehicle(&BuildOrder::default())
            .unwrap();

        assert_eq!(
            delivery.to_string(),
            "Vehicle with 4 seats, V8 engine, left-hand-drive, with GPS.\n\
             Manual:\n\
             Seats: This vehicle has 4 seats.\n\
             Engine: This vehicle is equipped with a V8 engine.\n\
             Steering: This vehicle is left-hand drive.\n\
             GPS: This vehicle is equipped with GPS."
        );
    }
}
