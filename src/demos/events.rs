//! Events as the observer pattern: a publisher owns a list of subscriber
//! closures and fires them when its state changes. Only the publisher can
//! raise the event; subscribers just get called.

use colored::Colorize;
use rand::Rng;

struct Thermometer {
    temperature: f64,
    subscribers: Vec<Box<dyn Fn(f64)>>,
}

impl Thermometer {
    fn new() -> Self {
        Self {
            temperature: 0.0,
            subscribers: Vec::new(),
        }
    }

    fn subscribe(&mut self, subscriber: impl Fn(f64) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Fires the event only on an actual change.
    fn set_temperature(&mut self, temp: f64) {
        if (temp - self.temperature).abs() < f64::EPSILON {
            return;
        }
        self.temperature = temp;
        println!("temperature set to {:.1}°C", temp);
        for subscriber in &self.subscribers {
            subscriber(temp);
        }
    }
}

pub fn run() {
    println!("{}", "Events: publisher and subscribers".bold().green());
    println!();

    let mut sensor = Thermometer::new();

    sensor.subscribe(|temp| {
        if temp > 50.0 {
            println!("  alarm:   overheat at {:.1}°C", temp);
        } else {
            println!("  alarm:   {:.1}°C within safe range", temp);
        }
    });
    sensor.subscribe(|temp| println!("  display: showing {:.1}°C", temp));

    sensor.set_temperature(22.5);
    sensor.set_temperature(22.5); // no change, no event
    sensor.set_temperature(63.0);

    // A few random readings to show the subscribers firing repeatedly.
    let mut rng = rand::thread_rng();
    for _ in 0..2 {
        sensor.set_temperature(rng.gen_range(15.0..70.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn every_subscriber_sees_every_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut sensor = Thermometer::new();
        for _ in 0..2 {
            let log = Rc::clone(&seen);
            sensor.subscribe(move |t| log.borrow_mut().push(t));
        }

        sensor.set_temperature(10.0);
        sensor.set_temperature(20.0);
        assert_eq!(*seen.borrow(), vec![10.0, 10.0, 20.0, 20.0]);
    }

    #[test]
    fn unchanged_temperature_fires_nothing() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut sensor = Thermometer::new();
        let log = Rc::clone(&seen);
        sensor.subscribe(move |t| log.borrow_mut().push(t));

        sensor.set_temperature(10.0);
        sensor.set_temperature(10.0);
        assert_eq!(seen.borrow().len(), 1);
    }
}
