// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

mod journal;
mod store;

use journal::{Journal, JournalAction};
use spot_alloc_core::time::TIMESTAMP_FORMAT;
use spot_alloc_model::prelude::*;
use spot_alloc_registry::ParkingLot;
use std::io::{self, Write};
use tracing::warn;
use tracing_subscriber::EnvFilter;

const DATA_FILE: &str = "parking_data.json";
const JOURNAL_FILE: &str = "parking_transactions.log";

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

struct Session {
    lot: ParkingLot,
    waiting: WaitingQueue,
    journal: Journal,
}

impl Session {
    fn check_in(&mut self) -> io::Result<()> {
        println!("\n--- Check In Vehicle ---");
        if self.lot.is_full() {
            println!("The lot is full; the vehicle will be added to the waiting list.");
        }

        let tenant = read_line("Enter tenant name: ")?;
        if tenant.is_empty() {
            println!("Error: tenant name cannot be empty.");
            return Ok(());
        }

        let plate = match PlateKey::new(read_line("Enter vehicle plate: ")?) {
            Ok(plate) => plate,
            Err(error) => {
                println!("Error: {}", error);
                return Ok(());
            }
        };

        match self.lot.check_in(tenant.clone(), plate.clone()) {
            Ok(ticket) => {
                println!("\nCheck-in successful!");
                println!("{}", ticket);
                self.journal.record(JournalAction::CheckIn, &ticket);
            }
            Err(RegistryError::LotFull) => {
                self.waiting.enqueue(ClaimRequest::new(tenant, plate));
                println!("\nNo slot available; added to the waiting list.");
                println!("Current waiting list position: {}", self.waiting.len());
            }
            Err(error) => println!("Error: {}", error),
        }
        Ok(())
    }

    fn check_out(&mut self) -> io::Result<()> {
        println!("\n--- Check Out Vehicle ---");
        if self.lot.occupied_count() == 0 {
            println!("No vehicles currently parked.");
            return Ok(());
        }

        let prompt = format!("Enter spot number (1-{}): ", self.lot.capacity().value());
        let number: usize = match read_line(&prompt)?.parse() {
            Ok(number) => number,
            Err(_) => {
                println!("Error: please enter a valid number.");
                return Ok(());
            }
        };

        match self.lot.check_out(SlotId::new(number)) {
            Ok(ticket) => {
                println!("\n--- Checkout Report for Spot #{} ---", ticket.slot().value());
                println!("Tenant: {}", ticket.tenant());
                println!("Plate:  {}", ticket.plate());
                println!(
                    "Check-in time:  {}",
                    ticket.checked_in_at().format(TIMESTAMP_FORMAT)
                );
                if let Some(out) = ticket.checked_out_at() {
                    println!("Check-out time: {}", out.format(TIMESTAMP_FORMAT));
                }
                println!("Parking duration: {}", ticket.dwell_time());
                println!("Vehicle checked out successfully.");
                self.journal.record(JournalAction::CheckOut, &ticket);

                if !self.waiting.is_empty() {
                    println!("\nNote: {} vehicle(s) waiting.", self.waiting.len());
                }
            }
            Err(error) => println!("Error: {}", error),
        }
        Ok(())
    }

    fn status(&self) {
        println!("\n--- Lot Status ---");
        println!("Total capacity:  {}", self.lot.capacity().value());
        println!("Occupied spots:  {}", self.lot.occupied_count());
        println!("Available spots: {}", self.lot.available_count());

        let free: Vec<String> = self
            .lot
            .free_slots()
            .iter()
            .map(|slot| slot.value().to_string())
            .collect();
        if !free.is_empty() {
            println!("Free spots: {}", free.join(", "));
        }

        let tickets = self.lot.parked_tickets();
        if tickets.is_empty() {
            println!("\nThe parking lot is currently empty.");
        } else {
            println!("\nParked vehicles:");
            for ticket in &tickets {
                println!("  {}", ticket);
            }
        }
    }

    fn search(&self) -> io::Result<()> {
        println!("\n--- Search Vehicle ---");
        let plate = match PlateKey::new(read_line("Enter vehicle plate: ")?) {
            Ok(plate) => plate,
            Err(error) => {
                println!("Error: {}", error);
                return Ok(());
            }
        };

        match self.lot.search(&plate) {
            Ok(ticket) => {
                println!("\n--- Search Result ---");
                println!("{}", ticket);
                println!("Current duration: {}", ticket.dwell_time());
            }
            Err(error) => println!("{}", error),
        }
        Ok(())
    }

    fn waiting_list(&self) {
        println!("\n--- Waiting List ---");
        if self.waiting.is_empty() {
            println!("No vehicles waiting.");
            return;
        }
        println!("Total waiting: {}", self.waiting.len());
        for (index, claim) in self.waiting.iter().enumerate() {
            println!("{}. {}", index + 1, claim);
        }
    }

    fn promote(&mut self) {
        println!("\n--- Promote From Waiting List ---");
        if self.lot.is_full() {
            println!("No free slot; check a vehicle out first.");
            return;
        }
        match self.waiting.dequeue() {
            None => println!("No vehicles waiting."),
            Some(claim) => {
                let (tenant, plate) = claim.into_parts();
                match self.lot.check_in(tenant, plate) {
                    Ok(ticket) => {
                        println!("Promoted: {}", ticket);
                        self.journal.record(JournalAction::CheckIn, &ticket);
                    }
                    // Stale claim, e.g. the plate was checked in by hand
                    // while it waited. The entry is consumed either way.
                    Err(error) => println!("Error: {}", error),
                }
            }
        }
    }

    fn report(&self) {
        println!("\n--- Occupancy Report ---");
        println!("Total spots:     {}", self.lot.capacity().value());
        println!("Occupied spots:  {}", self.lot.occupied_count());
        println!("Available spots: {}", self.lot.available_count());
        println!("Occupancy rate:  {:.2}%", self.lot.occupancy_rate());
        println!("Vehicles waiting: {}", self.waiting.len());

        let tickets = self.lot.parked_tickets();
        if !tickets.is_empty() {
            println!("\nParked vehicles:");
            for ticket in &tickets {
                println!(
                    "  - Spot #{}: {} ({})",
                    ticket.slot().value(),
                    ticket.tenant(),
                    ticket.plate()
                );
            }
        }
    }
}

fn read_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn print_menu() {
    println!("\n==============================");
    println!("   SPOT MANAGEMENT SYSTEM");
    println!("==============================");
    println!("1. Check in vehicle");
    println!("2. Check out vehicle");
    println!("3. View lot status");
    println!("4. Search vehicle");
    println!("5. View waiting list");
    println!("6. Promote from waiting list");
    println!("7. Generate report");
    println!("8. Exit");
    println!("==============================");
}

fn run_demo(config: TrafficConfig) {
    println!("Demo traffic: {}", config);
    let mut lot = ParkingLot::new(SlotCapacity::default());
    let mut waiting = WaitingQueue::new();

    for claim in generate_traffic(&config) {
        let (tenant, plate) = claim.into_parts();
        match lot.check_in(tenant.clone(), plate.clone()) {
            Ok(ticket) => println!("Assigned:   {}", ticket),
            Err(RegistryError::LotFull) => {
                let claim = ClaimRequest::new(tenant, plate);
                println!("Waitlisted: {}", claim);
                waiting.enqueue(claim);
            }
            Err(error) => println!("Rejected:   {}", error),
        }
    }

    println!(
        "\nOccupied {}/{} spots, {} waiting.",
        lot.occupied_count(),
        lot.capacity().value(),
        waiting.len()
    );
}

fn main() -> io::Result<()> {
    enable_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.first().map(String::as_str) == Some("--demo") {
        let config = match args.get(1).and_then(|raw| raw.parse().ok()) {
            Some(arrivals) => TrafficConfig::new(arrivals, TrafficConfig::default().seed()),
            None => TrafficConfig::default(),
        };
        run_demo(config);
        return Ok(());
    }

    let lot = match store::load(DATA_FILE) {
        Ok(Some(snapshot)) => ParkingLot::restore(snapshot),
        Ok(None) => ParkingLot::new(SlotCapacity::default()),
        Err(error) => {
            warn!(%error, "failed to load snapshot, starting fresh");
            ParkingLot::new(SlotCapacity::default())
        }
    };

    println!("================================================");
    println!("SPOT (Smart Parking Optimization for Tenants)");
    println!("================================================");
    println!("Total parking spots: {}", lot.capacity().value());
    if lot.occupied_count() > 0 {
        println!("Restored {} parked vehicle(s).", lot.occupied_count());
    }

    let mut session = Session {
        lot,
        waiting: WaitingQueue::new(),
        journal: Journal::new(JOURNAL_FILE),
    };

    loop {
        print_menu();
        match read_line("Enter your choice (1-8): ")?.as_str() {
            "1" => session.check_in()?,
            "2" => session.check_out()?,
            "3" => session.status(),
            "4" => session.search()?,
            "5" => session.waiting_list(),
            "6" => session.promote(),
            "7" => session.report(),
            "8" => break,
            _ => println!("Invalid choice. Please enter a number between 1 and 8."),
        }
    }

    if let Err(error) = store::save(DATA_FILE, &session.lot.snapshot()) {
        warn!(%error, "failed to save snapshot");
    }
    println!("\nExiting SPOT system. Goodbye!");
    Ok(())
}
