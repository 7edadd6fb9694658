use http11_response::status::StatusCode;
use http11_response::{Outcome, ResponseBuilder};
use serde_json::{json, Value};

fn find_user(id: u32, res: ResponseBuilder<Value>) {
    if id == 0 {
        res.bad_request("id must be positive");
        return;
    }

    if id > 100 {
        res.not_found(format!("user {} does not exist", id));
        return;
    }

    res.set_header("content-type", "application/json")
        .set_header("cache-control", "max-age=60")
        .set_status_code(StatusCode::OK)
        .send(json!({ "id": id, "name": "foobar" }));
}

fn print_outcome(outcome: Outcome<Value>) {
    match outcome {
        Ok(reply) => {
            println!("{}", reply.status);
            for (name, value) in &reply.headers {
                println!("{}: {}", name, value);
            }
            println!("{}", reply.body);
        }
        Err(error) => {
            println!("{}", error.status_code);
            println!("{}", error.message);
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    for id in [7, 0, 512].iter() {
        let (res, completion) = ResponseBuilder::channel();
        find_user(*id, res);
        print_outcome(completion.await);
    }

    let res = ResponseBuilder::with_callback(print_outcome);
    res.set_header("etag", "\"v1\"").not_modified();
}
